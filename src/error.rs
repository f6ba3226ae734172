use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AttributeError>;

/// Why an external invocation or its output was rejected.
#[derive(Error, Debug)]
pub enum CommandError
{
  #[error("can't launch {program} : {source}")]
  Spawn
  {
    program : String,
    #[source]
    source : io::Error,
  },

  #[error("command exited with {} : {stderr}", describe_code(.code))]
  Status
  {
    code : Option<i32>,
    stderr : String,
  },

  #[error("output {output:?} is not a decimal integer")]
  Parse
  {
    output : String,
    #[source]
    source : Option<ParseIntError>,
  },

  #[error("path {0:?} is not valid unicode")]
  InvalidPath(PathBuf),
}

fn describe_code(code : &Option<i32>) -> String
{
  match code
  {
    Some(code) => format!("code {}", code),
    None => "no exit code".to_string(),
  }
}

/// Error returned by every attribute operation, wrapping the failed step.
#[derive(Error, Debug)]
pub enum AttributeError
{
  #[error("Failed to get file attributes: {0}")]
  Get(#[source] CommandError),

  #[error("Failed to set file attributes: {0}")]
  Set(#[source] CommandError),

  #[error("Failed to add file attributes: {0}")]
  Add(#[source] CommandError),

  #[error("Failed to remove file attributes: {0}")]
  Remove(#[source] CommandError),

  #[error("Failed to check file attributes: {0}")]
  Check(#[source] CommandError),
}

impl AttributeError
{
  pub fn cause(&self) -> &CommandError
  {
    match self
    {
      AttributeError::Get(cause) | AttributeError::Set(cause) | AttributeError::Add(cause) | AttributeError::Remove(cause) | AttributeError::Check(cause) => cause,
    }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;
  use std::error::Error as _;

  #[test]
  fn message_embeds_cause()
  {
    let error = AttributeError::Add(CommandError::Status{ code : Some(1), stderr : "Cannot find path".into() });

    assert_eq!(error.to_string(), "Failed to add file attributes: command exited with code 1 : Cannot find path");
    assert!(error.source().is_some());
    assert!(matches!(error.cause(), CommandError::Status{ code : Some(1), .. }));
  }

  #[test]
  fn parse_error_keeps_output()
  {
    let source = "abc".parse::<u32>().unwrap_err();
    let error = AttributeError::Get(CommandError::Parse{ output : "abc".into(), source : Some(source) });

    assert_eq!(error.to_string(), "Failed to get file attributes: output \"abc\" is not a decimal integer");
    assert!(error.cause().source().is_some());
  }

  #[test]
  fn status_without_code()
  {
    let error = CommandError::Status{ code : None, stderr : String::new() };
    assert_eq!(error.to_string(), "command exited with no exit code : ");
  }
}
