//! Command parser
//!
//! Parses a shell line into a [`Command`].

use crate::command::Command;

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unclosed quote")]
    UnclosedQuote,

    #[error("Syntax error: {0}")]
    SyntaxError(String),
}

/// Token type
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Word (command name or argument)
    Word(String),
    /// Long option (--name)
    LongOption(String),
}

/// Command line parser
#[derive(Debug, Default)]
pub struct Parser;

impl Parser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a command line
    pub fn parse(&self, input: &str) -> Result<Command, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tokens = self.tokenize(input)?;
        self.parse_tokens(&tokens)
    }

    /// Tokenize input string
    fn tokenize(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                ' ' | '\t' => {
                    chars.next();
                }

                // Quoted food names may contain spaces
                '"' | '\'' => {
                    let quote = c;
                    chars.next();
                    let mut word = String::new();
                    let mut closed = false;

                    while let Some(c) = chars.next() {
                        if c == quote {
                            closed = true;
                            break;
                        }
                        if c == '\\' && quote == '"' {
                            match chars.next() {
                                Some(next @ ('"' | '\\')) => word.push(next),
                                Some(next) => {
                                    word.push('\\');
                                    word.push(next);
                                }
                                None => break,
                            }
                            continue;
                        }
                        word.push(c);
                    }

                    if !closed {
                        return Err(ParseError::UnclosedQuote);
                    }

                    tokens.push(Token::Word(word));
                }

                '-' if chars.clone().nth(1) == Some('-') => {
                    chars.next();
                    chars.next();

                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_alphanumeric() || c == '-' || c == '_' {
                            name.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    if name.is_empty() {
                        return Err(ParseError::SyntaxError("Empty option name".to_string()));
                    }

                    tokens.push(Token::LongOption(name));
                }

                _ => {
                    let mut word = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == ' ' || c == '\t' || c == '"' || c == '\'' {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    tokens.push(Token::Word(word));
                }
            }
        }

        Ok(tokens)
    }

    /// Parse tokens into command
    fn parse_tokens(&self, tokens: &[Token]) -> Result<Command, ParseError> {
        let mut iter = tokens.iter();

        let name = match iter.next() {
            Some(Token::Word(w)) => w.to_lowercase(),
            Some(t) => return Err(ParseError::UnexpectedToken(format!("{:?}", t))),
            None => return Err(ParseError::EmptyInput),
        };

        let mut cmd = Command::new(name);
        for token in iter {
            match token {
                Token::Word(w) => cmd.args.push(w.clone()),
                Token::LongOption(o) => cmd.flags.push(o.clone()),
            }
        }

        Ok(cmd)
    }
}
