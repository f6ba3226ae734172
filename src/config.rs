use serde::{Serialize, Deserialize};
use schemars::JsonSchema;

/// How the shell running attribute scripts is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ShellConfig
{
  /// executable name or full path, looked up in `PATH` when relative
  pub program : String,
  /// arguments placed before the script, the last one must make the shell read a command
  pub arguments : Vec<String>,
}

impl Default for ShellConfig
{
  fn default() -> Self
  {
    ShellConfig{
      program : "powershell".to_string(),
      arguments : vec!["-NoProfile".to_string(), "-NonInteractive".to_string(), "-Command".to_string()],
    }
  }
}

impl ShellConfig
{
  pub fn new(program : impl Into<String>, arguments : Vec<String>) -> Self
  {
    ShellConfig{ program : program.into(), arguments }
  }

  /// PowerShell 7 (`pwsh`) with the default arguments.
  pub fn pwsh() -> Self
  {
    ShellConfig{ program : "pwsh".to_string(), ..ShellConfig::default() }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn missing_fields_use_defaults() -> anyhow::Result<()>
  {
    let config : ShellConfig = serde_json::from_str(r#"{ "program" : "C:\\tools\\pwsh.exe" }"#)?;

    assert_eq!(config.program, "C:\\tools\\pwsh.exe");
    assert_eq!(config.arguments, ShellConfig::default().arguments);
    Ok(())
  }

  #[test]
  fn empty_object_is_default() -> anyhow::Result<()>
  {
    let config : ShellConfig = serde_json::from_str("{}")?;
    assert_eq!(config, ShellConfig::default());
    Ok(())
  }

  #[test]
  fn schema_lists_fields()
  {
    let schema = schemars::schema_for!(ShellConfig);
    let object = schema.schema.object.expect("object schema");

    assert!(object.properties.contains_key("program"));
    assert!(object.properties.contains_key("arguments"));
  }
}
