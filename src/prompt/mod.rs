//! Interactive prompts.
//!
//! Services talk to the user only through [`Prompt`], so flows can be driven
//! by a scripted implementation in tests and by [`TerminalPrompt`] in the
//! binary.

mod terminal;

pub use terminal::{ListStyle, TerminalPrompt};

use crate::error::ZopError;

/// An entry of a selection list
#[derive(Debug, Clone)]
pub struct Item<T> {
    pub id: Option<i64>,
    pub name: String,
    pub data: T,
}

impl<T> Item<T> {
    pub fn new(id: Option<i64>, name: impl Into<String>, data: T) -> Self {
        Self {
            id,
            name: name.into(),
            data,
        }
    }
}

pub trait Prompt {
    /// Show `labels` under `title`; `None` means the user backed out
    fn select(&self, title: &str, labels: &[String]) -> Result<Option<usize>, ZopError>;

    /// Ask for a line of free text
    fn input(&self, message: &str) -> Result<String, ZopError>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> Result<bool, ZopError>;
}

/// Let the user pick one of `items` and hand back its payload.
///
/// An empty list returns `None` without prompting.
pub fn choose<T>(prompt: &dyn Prompt, title: &str, items: Vec<Item<T>>) -> Result<Option<T>, ZopError> {
    if items.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = items.iter().map(|i| i.name.clone()).collect();
    let picked = prompt.select(title, &labels)?;
    Ok(picked.and_then(|idx| items.into_iter().nth(idx)).map(|i| i.data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Fixed {
        pick: Option<usize>,
        calls: RefCell<usize>,
    }

    impl Prompt for Fixed {
        fn select(&self, _title: &str, _labels: &[String]) -> Result<Option<usize>, ZopError> {
            *self.calls.borrow_mut() += 1;
            Ok(self.pick)
        }
        fn input(&self, _message: &str) -> Result<String, ZopError> {
            Ok(String::new())
        }
        fn confirm(&self, _message: &str) -> Result<bool, ZopError> {
            Ok(false)
        }
    }

    #[test]
    fn returns_payload_of_picked_item() {
        let p = Fixed { pick: Some(1), calls: RefCell::new(0) };
        let items = vec![Item::new(Some(1), "a", 10), Item::new(Some(2), "b", 20)];
        assert_eq!(choose(&p, "t", items).unwrap(), Some(20));
    }

    #[test]
    fn empty_list_skips_prompt() {
        let p = Fixed { pick: Some(0), calls: RefCell::new(0) };
        let items: Vec<Item<i32>> = vec![];
        assert_eq!(choose(&p, "t", items).unwrap(), None);
        assert_eq!(*p.calls.borrow(), 0);
    }

    #[test]
    fn abort_is_none() {
        let p = Fixed { pick: None, calls: RefCell::new(0) };
        let items = vec![Item::new(None, "a", 1)];
        assert_eq!(choose(&p, "t", items).unwrap(), None);
    }
}
