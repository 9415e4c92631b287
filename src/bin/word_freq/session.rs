use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use tracing::{debug, warn};

use crate::words::WordTree;

const MENU: &str = "Select Q)uit, P)rint, B)ackward print, S)earch, D)elete, C)ount, T)ree: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Print,
    BackwardPrint,
    Search,
    Delete,
    Count,
    Tree,
}

impl Action {
    /// Parse an action from the first character of `token`, ignoring case.
    fn parse(token: &str) -> Option<Self> {
        Some(match token.chars().next()?.to_ascii_uppercase() {
            'Q' => Self::Quit,
            'P' => Self::Print,
            'B' => Self::BackwardPrint,
            'S' => Self::Search,
            'D' => Self::Delete,
            'C' => Self::Count,
            'T' => Self::Tree,
            _ => return None,
        })
    }
}

/// Whitespace separated tokens read from a line-oriented input.
#[derive(Debug)]
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Return the next token, or [`None`] at the end of the input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(v) = self.pending.pop_front() {
                return Ok(Some(v));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Answer queries against `tree` read from `input`, writing results to `out`
/// and prompts to `prompt`.
///
/// Runs until a quit action or the end of the input, then tears the tree
/// down.
pub(crate) fn run<R, W, P>(mut tree: WordTree, input: R, mut out: W, mut prompt: P) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let mut tokens = Tokens::new(input);

    write!(prompt, "{MENU}")?;
    prompt.flush()?;

    while let Some(token) = tokens.next_token()? {
        let Some(action) = Action::parse(&token) else {
            warn!(%token, "unknown action");
            continue;
        };
        debug!(?action, "running action");

        match action {
            Action::Quit => break,
            Action::Print => tree.iter().try_for_each(|w| writeln!(out, "{w}"))?,
            Action::BackwardPrint => tree.iter().rev().try_for_each(|w| writeln!(out, "{w}"))?,
            Action::Search => {
                let Some(word) = read_word(&mut tokens, &mut prompt)? else {
                    break;
                };
                match tree.get(word.as_str()) {
                    Some(w) => writeln!(out, "{w}")?,
                    None => writeln!(out, "{word} not found")?,
                }
            }
            Action::Delete => {
                let Some(word) = read_word(&mut tokens, &mut prompt)? else {
                    break;
                };
                match tree.remove(word.as_str()) {
                    Some(w) => writeln!(out, "({}, {}) deleted", w.text(), w.freq())?,
                    None => writeln!(out, "{word} not found")?,
                }
            }
            Action::Count => writeln!(out, "{}", tree.len())?,
            Action::Tree => write!(out, "{}", tree.dump(|w| w.text().to_string()))?,
        }

        write!(prompt, "{MENU}")?;
        prompt.flush()?;
    }

    out.flush()?;

    let mut released = 0_usize;
    tree.destroy(|_| released += 1);
    debug!(released, "released words");

    Ok(())
}

fn read_word<R, P>(tokens: &mut Tokens<R>, prompt: &mut P) -> io::Result<Option<String>>
where
    R: BufRead,
    P: Write,
{
    write!(prompt, "Input a word to find: ")?;
    prompt.flush()?;
    tokens.next_token()
}
