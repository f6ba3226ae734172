//! Windows file attribute flags, as reported by `Get-Item` in `Attributes.value__`.

pub mod writable;

use std::fmt;

bitflags!
{
  /// Values mirror the `FILE_ATTRIBUTE_*` constants of the Windows API and must never change.
  pub struct FileAttributes : u32
  {
    const READONLY             = 0x0000_0001;
    const HIDDEN               = 0x0000_0002;
    const SYSTEM               = 0x0000_0004;
    const DIRECTORY            = 0x0000_0010;
    const ARCHIVE              = 0x0000_0020;
    const NORMAL               = 0x0000_0080;
    const TEMPORARY            = 0x0000_0100;
    const COMPRESSED           = 0x0000_0800;
    const NOT_CONTENT_INDEXED  = 0x0000_2000;
    const ENCRYPTED            = 0x0000_4000;
  }
}

/// Every known attribute with its symbolic name, in declaration order.
pub const ATTRIBUTES : [(&str, FileAttributes); 10] = [
  ("READONLY", FileAttributes::READONLY),
  ("HIDDEN", FileAttributes::HIDDEN),
  ("SYSTEM", FileAttributes::SYSTEM),
  ("DIRECTORY", FileAttributes::DIRECTORY),
  ("ARCHIVE", FileAttributes::ARCHIVE),
  ("NORMAL", FileAttributes::NORMAL),
  ("TEMPORARY", FileAttributes::TEMPORARY),
  ("COMPRESSED", FileAttributes::COMPRESSED),
  ("NOT_CONTENT_INDEXED", FileAttributes::NOT_CONTENT_INDEXED),
  ("ENCRYPTED", FileAttributes::ENCRYPTED),
];

impl FileAttributes
{
  /// Look up a single attribute by its symbolic name (`"HIDDEN"`, `"NOT_CONTENT_INDEXED"`, ...).
  pub fn from_name(name : &str) -> Option<FileAttributes>
  {
    ATTRIBUTES.iter().find(|(attribute_name, _)| *attribute_name == name).map(|(_, flag)| *flag)
  }

  /// Symbolic name of a single known attribute, `None` for combinations or unknown bits.
  pub fn name(self) -> Option<&'static str>
  {
    ATTRIBUTES.iter().find(|(_, flag)| *flag == self).map(|(name, _)| *name)
  }

  /// Known attributes contained in this set, in declaration order.
  pub fn flags(self) -> Vec<FileAttributes>
  {
    ATTRIBUTES.iter().filter(|(_, flag)| self.contains(*flag)).map(|(_, flag)| *flag).collect()
  }

  pub fn names(self) -> Vec<&'static str>
  {
    ATTRIBUTES.iter().filter(|(_, flag)| self.contains(*flag)).map(|(name, _)| *name).collect()
  }
}

impl fmt::Display for FileAttributes
{
  fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result
  {
    write!(f, "{}", self.names().join(" | "))
  }
}

/**
 *  Split a raw attribute integer into its known flags, unknown bits are ignored.
 */
pub fn decode_to_flags(numeric : u32) -> Vec<FileAttributes>
{
  ATTRIBUTES.iter()
            .filter(|(_, flag)| numeric & flag.bits() == flag.bits())
            .map(|(_, flag)| *flag)
            .collect()
}

pub fn decode_to_names(numeric : u32) -> Vec<&'static str>
{
  ATTRIBUTES.iter()
            .filter(|(_, flag)| numeric & flag.bits() == flag.bits())
            .map(|(name, _)| *name)
            .collect()
}
