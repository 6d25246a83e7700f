#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use salvo::{InputReader, OutputWriter, Prompt};

/// Replays a fixed list of tokens and records which prompts asked for them.
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    pub prompts: Vec<Prompt>,
}

impl ScriptedInput {
    pub fn new(script: &str) -> Self {
        Self {
            tokens: script.split_whitespace().map(str::to_string).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputReader for ScriptedInput {
    fn read_token(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        self.prompts.push(prompt);
        Ok(self.tokens.pop_front())
    }
}

/// Collects everything written.
#[derive(Default)]
pub struct CaptureOutput {
    pub text: String,
}

impl OutputWriter for CaptureOutput {
    fn write(&mut self, message: &str) -> io::Result<()> {
        self.text.push_str(message);
        Ok(())
    }

    fn writeln(&mut self, message: &str) -> io::Result<()> {
        self.text.push_str(message);
        self.text.push('\n');
        Ok(())
    }
}
