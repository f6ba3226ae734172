use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Serialize, Deserialize};
use schemars::JsonSchema;

use crate::attributes::FileAttributes;

/// Attributes that `Set-ItemProperty` accepts directly. Write operations only take these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum WritableAttribute
{
  #[serde(rename = "READONLY")]
  ReadOnly = 0x01,
  Hidden = 0x02,
  System = 0x04,
  Archive = 0x20,
  Normal = 0x80,
}

impl WritableAttribute
{
  pub const ALL : [WritableAttribute; 5] = [
    WritableAttribute::Archive,
    WritableAttribute::Hidden,
    WritableAttribute::Normal,
    WritableAttribute::ReadOnly,
    WritableAttribute::System,
  ];

  pub fn bits(self) -> u32
  {
    self.to_u32().unwrap_or(0)
  }

  /// OR of all given attributes, 0 for an empty slice.
  pub fn mask(attributes : &[WritableAttribute]) -> u32
  {
    attributes.iter().fold(0, |mask, attribute| mask | attribute.bits())
  }

  /// Only an exact single writable bit converts.
  pub fn from_bits(bits : u32) -> Option<WritableAttribute>
  {
    WritableAttribute::from_u32(bits)
  }
}

impl From<WritableAttribute> for FileAttributes
{
  fn from(attribute : WritableAttribute) -> Self
  {
    FileAttributes::from_bits_truncate(attribute.bits())
  }
}

impl TryFrom<FileAttributes> for WritableAttribute
{
  type Error = FileAttributes;

  fn try_from(attributes : FileAttributes) -> Result<Self, Self::Error>
  {
    WritableAttribute::from_bits(attributes.bits()).ok_or(attributes)
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn values_match_file_attributes()
  {
    assert_eq!(FileAttributes::from(WritableAttribute::Archive), FileAttributes::ARCHIVE);
    assert_eq!(FileAttributes::from(WritableAttribute::Hidden), FileAttributes::HIDDEN);
    assert_eq!(FileAttributes::from(WritableAttribute::Normal), FileAttributes::NORMAL);
    assert_eq!(FileAttributes::from(WritableAttribute::ReadOnly), FileAttributes::READONLY);
    assert_eq!(FileAttributes::from(WritableAttribute::System), FileAttributes::SYSTEM);
  }

  #[test]
  fn mask_combines()
  {
    assert_eq!(WritableAttribute::mask(&[]), 0);
    assert_eq!(WritableAttribute::mask(&[WritableAttribute::Archive, WritableAttribute::ReadOnly]), 33);
    assert_eq!(WritableAttribute::mask(&[WritableAttribute::Hidden, WritableAttribute::Hidden]), 2);
  }

  #[test]
  fn non_writable_is_rejected()
  {
    assert_eq!(WritableAttribute::try_from(FileAttributes::SYSTEM), Ok(WritableAttribute::System));
    assert_eq!(WritableAttribute::try_from(FileAttributes::DIRECTORY), Err(FileAttributes::DIRECTORY));
    assert!(WritableAttribute::try_from(FileAttributes::HIDDEN | FileAttributes::ARCHIVE).is_err());
    assert_eq!(WritableAttribute::from_bits(0x100), None);
  }

  #[test]
  fn names_round_through_serde() -> anyhow::Result<()>
  {
    let attribute : WritableAttribute = serde_json::from_str("\"READONLY\"")?;
    assert_eq!(attribute, WritableAttribute::ReadOnly);
    assert_eq!(serde_json::to_string(&WritableAttribute::Archive)?, "\"ARCHIVE\"");
    Ok(())
  }
}
