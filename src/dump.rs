use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the subtree rooted at `n` rotated 90° anticlockwise, one value per
/// line, indented by one tab per level (the root is at level 1).
///
/// The right subtree is written first, so reading top to bottom yields the
/// values in descending order and the root appears on the left.
pub(crate) fn dump<T, W, F, D>(n: Option<&Node<T>>, buf: &mut W, render: &F) -> std::fmt::Result
where
    W: Write,
    F: Fn(&T) -> D,
    D: Display,
{
    recurse(n, 1, buf, render)
}

fn recurse<T, W, F, D>(n: Option<&Node<T>>, level: usize, buf: &mut W, render: &F) -> std::fmt::Result
where
    W: Write,
    F: Fn(&T) -> D,
    D: Display,
{
    let Some(n) = n else {
        return Ok(());
    };

    recurse(n.right(), level + 1, buf, render)?;

    for _ in 0..level {
        buf.write_char('\t')?;
    }
    writeln!(buf, "{}", render(n.value()))?;

    recurse(n.left(), level + 1, buf, render)
}
