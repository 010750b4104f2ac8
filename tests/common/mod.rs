#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use zop::prompt::Prompt;
use zop::ZopError;

/// Prompt answering from a script and remembering what it was asked
#[derive(Default)]
pub struct ScriptedPrompt {
    picks: RefCell<VecDeque<Option<usize>>>,
    inputs: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
    pub titles: RefCell<Vec<String>>,
    pub labels: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn picks(picks: &[Option<usize>]) -> Self {
        let p = Self::default();
        p.picks.borrow_mut().extend(picks.iter().copied());
        p
    }

    pub fn with_inputs(self, inputs: &[&str]) -> Self {
        self.inputs.borrow_mut().extend(inputs.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_confirms(self, answers: &[bool]) -> Self {
        self.confirms.borrow_mut().extend(answers.iter().copied());
        self
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn select(&self, title: &str, labels: &[String]) -> Result<Option<usize>, ZopError> {
        self.titles.borrow_mut().push(title.to_string());
        self.labels.borrow_mut().push(labels.to_vec());
        Ok(self.picks.borrow_mut().pop_front().flatten())
    }

    fn input(&self, _message: &str) -> Result<String, ZopError> {
        self.inputs.borrow_mut().pop_front().ok_or(ZopError::RenderList)
    }

    fn confirm(&self, _message: &str) -> Result<bool, ZopError> {
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(false))
    }
}
