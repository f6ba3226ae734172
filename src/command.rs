//! External process invocation and the PowerShell scripts reading or writing attributes.

use std::num::ParseIntError;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, trace, warn};

use crate::config::ShellConfig;
use crate::error::CommandError;

/// Runs one script and returns its captured standard output.
///
/// A non-zero exit status must be reported as [`CommandError::Status`].
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner
{
  fn run(&self, script : &str) -> Result<String, CommandError>;
}

/// Runs scripts through a shell child process started with an argument array, never through `cmd.exe`.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner
{
  config : ShellConfig,
}

impl ShellRunner
{
  pub fn new(config : ShellConfig) -> Self
  {
    ShellRunner{ config }
  }

  pub fn config(&self) -> &ShellConfig
  {
    &self.config
  }
}

impl CommandRunner for ShellRunner
{
  fn run(&self, script : &str) -> Result<String, CommandError>
  {
    debug!("{} : {}", self.config.program, script);

    let output = Command::new(&self.config.program)
                         .args(&self.config.arguments)
                         .arg(script)
                         .stdin(Stdio::null())
                         .output()
                         .map_err(|source| CommandError::Spawn{ program : self.config.program.clone(), source })?;

    if !output.status.success()
    {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      warn!("{} exited with {:?} : {}", self.config.program, output.status.code(), stderr);
      return Err(CommandError::Status{ code : output.status.code(), stderr });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    trace!("output {:?}", stdout);
    Ok(stdout)
  }
}

//PowerShell treats all of these as single quotes inside a literal string
const SINGLE_QUOTES : [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// Quote `path` as a PowerShell single-quoted literal, doubling every embedded quote.
pub fn quote_path(path : &Path) -> Result<String, CommandError>
{
  let path = path.to_str().ok_or_else(|| CommandError::InvalidPath(path.to_path_buf()))?;

  let mut quoted = String::with_capacity(path.len() + 2);
  quoted.push('\'');
  for c in path.chars()
  {
    if SINGLE_QUOTES.contains(&c)
    {
      quoted.push(c);
    }
    quoted.push(c);
  }
  quoted.push('\'');
  Ok(quoted)
}

pub fn get_attributes_script(path : &Path) -> Result<String, CommandError>
{
  Ok(format!("$ErrorActionPreference = 'Stop'; (Get-Item -LiteralPath {} -Force).Attributes.value__", quote_path(path)?))
}

pub fn set_attributes_script(path : &Path, value : u32) -> Result<String, CommandError>
{
  Ok(format!("$ErrorActionPreference = 'Stop'; Set-ItemProperty -LiteralPath {} -Name Attributes -Value {}", quote_path(path)?, value))
}

/// Parse the trimmed output of [`get_attributes_script`] as a base-10 integer.
pub fn parse_attributes(output : &str) -> Result<u32, CommandError>
{
  let trimmed = output.trim();
  let not_decimal = |source : Option<ParseIntError>|
  {
    warn!("unexpected attributes output {:?}", trimmed);
    CommandError::Parse{ output : trimmed.to_string(), source }
  };

  //u32::from_str would accept it
  if trimmed.starts_with('+')
  {
    return Err(not_decimal(None))
  }
  trimmed.parse::<u32>().map_err(|source| not_decimal(Some(source)))
}
