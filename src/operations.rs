//! Read and write the attributes of a single path through a [`CommandRunner`].
//!
//! Add and remove are read-modify-write sequences of two invocations. Nothing locks the path in
//! between: a change made by someone else after the read is overwritten by the write.

use std::path::Path;

use log::debug;

use crate::attributes::FileAttributes;
use crate::attributes::writable::WritableAttribute;
use crate::command::{CommandRunner, ShellRunner, get_attributes_script, set_attributes_script, parse_attributes};
use crate::config::ShellConfig;
use crate::error::{AttributeError, CommandError, Result};

#[derive(Debug, Clone, Default)]
pub struct FileAttributesManager<R = ShellRunner>
{
  runner : R,
}

impl FileAttributesManager<ShellRunner>
{
  pub fn with_config(config : ShellConfig) -> Self
  {
    FileAttributesManager{ runner : ShellRunner::new(config) }
  }
}

impl<R : CommandRunner> FileAttributesManager<R>
{
  pub fn new(runner : R) -> Self
  {
    FileAttributesManager{ runner }
  }

  pub fn runner(&self) -> &R
  {
    &self.runner
  }

  fn read(&self, path : &Path) -> std::result::Result<u32, CommandError>
  {
    let script = get_attributes_script(path)?;
    let output = self.runner.run(&script)?;
    parse_attributes(&output)
  }

  fn write(&self, path : &Path, value : u32) -> std::result::Result<(), CommandError>
  {
    debug!("setting attributes of {} to {:#x}", path.display(), value);
    let script = set_attributes_script(path, value)?;
    self.runner.run(&script)?;
    Ok(())
  }

  /// Combined attribute bits of `path`, unknown bits included.
  pub fn get_raw_attributes<P : AsRef<Path>>(&self, path : P) -> Result<u32>
  {
    self.read(path.as_ref()).map_err(AttributeError::Get)
  }

  /// Known attributes of `path`, unknown bits are dropped.
  pub fn get_attributes<P : AsRef<Path>>(&self, path : P) -> Result<FileAttributes>
  {
    Ok(FileAttributes::from_bits_truncate(self.get_raw_attributes(path)?))
  }

  /// Symbolic names of the attributes of `path`, in declaration order.
  pub fn get_attribute_names<P : AsRef<Path>>(&self, path : P) -> Result<Vec<&'static str>>
  {
    Ok(crate::attributes::decode_to_names(self.get_raw_attributes(path)?))
  }

  /// Replace all attributes of `path` with exactly `attributes`.
  pub fn set_attributes<P : AsRef<Path>>(&self, path : P, attributes : &[WritableAttribute]) -> Result<()>
  {
    self.write(path.as_ref(), WritableAttribute::mask(attributes)).map_err(AttributeError::Set)
  }

  pub fn add_attributes<P : AsRef<Path>>(&self, path : P, attributes : &[WritableAttribute]) -> Result<()>
  {
    let path = path.as_ref();
    let current = self.read(path).map_err(AttributeError::Add)?;
    let updated = current | WritableAttribute::mask(attributes);

    self.write(path, updated).map_err(AttributeError::Add)
  }

  pub fn remove_attributes<P : AsRef<Path>>(&self, path : P, attributes : &[WritableAttribute]) -> Result<()>
  {
    let path = path.as_ref();
    let current = self.read(path).map_err(AttributeError::Remove)?;
    let updated = current & !WritableAttribute::mask(attributes);

    self.write(path, updated).map_err(AttributeError::Remove)
  }

  /// True only if every requested attribute is set, an empty request is always true.
  pub fn has_attributes<P : AsRef<Path>>(&self, path : P, attributes : &[FileAttributes]) -> Result<bool>
  {
    let requested = attributes.iter().fold(0, |mask, attribute| mask | attribute.bits());
    let current = self.read(path.as_ref()).map_err(AttributeError::Check)?;

    Ok(current & requested == requested)
  }

  pub fn has_attribute<P : AsRef<Path>>(&self, path : P, attribute : FileAttributes) -> Result<bool>
  {
    self.has_attributes(path, &[attribute])
  }
}

fn shell_manager() -> FileAttributesManager
{
  FileAttributesManager::default()
}

/// See [`FileAttributesManager::get_raw_attributes`], using the default PowerShell runner.
pub fn get_raw_attributes<P : AsRef<Path>>(path : P) -> Result<u32>
{
  shell_manager().get_raw_attributes(path)
}

pub fn get_attributes<P : AsRef<Path>>(path : P) -> Result<FileAttributes>
{
  shell_manager().get_attributes(path)
}

pub fn get_attribute_names<P : AsRef<Path>>(path : P) -> Result<Vec<&'static str>>
{
  shell_manager().get_attribute_names(path)
}

pub fn set_attributes<P : AsRef<Path>>(path : P, attributes : &[WritableAttribute]) -> Result<()>
{
  shell_manager().set_attributes(path, attributes)
}

pub fn add_attributes<P : AsRef<Path>>(path : P, attributes : &[WritableAttribute]) -> Result<()>
{
  shell_manager().add_attributes(path, attributes)
}

pub fn remove_attributes<P : AsRef<Path>>(path : P, attributes : &[WritableAttribute]) -> Result<()>
{
  shell_manager().remove_attributes(path, attributes)
}

pub fn has_attributes<P : AsRef<Path>>(path : P, attributes : &[FileAttributes]) -> Result<bool>
{
  shell_manager().has_attributes(path, attributes)
}

pub fn has_attribute<P : AsRef<Path>>(path : P, attribute : FileAttributes) -> Result<bool>
{
  shell_manager().has_attribute(path, attribute)
}
