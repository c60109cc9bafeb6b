use super::RecordType;
use crate::errors::RegistryError;

/// Prefix of the RFC 3597 generic type mnemonic (`TYPE65280`).
const GENERIC_PREFIX: &str = "TYPE";

/// Read-only mapping between record-type names and their 16-bit wire codes.
///
/// The set of enabled types is fixed when the registry is built; callers share
/// it behind an `Arc` and never mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    types: Vec<RecordType>,
}

impl TypeRegistry {
    /// Registry with every known [`RecordType`] enabled.
    pub fn standard() -> Self {
        Self {
            types: RecordType::ALL.to_vec(),
        }
    }

    /// Registry restricted to `types`, kept in wire-code order.
    pub fn with_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = RecordType>,
    {
        let mut types: Vec<RecordType> = types.into_iter().collect();
        types.sort_by_key(|t| t.to_u16());
        types.dedup();
        Self { types }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.types.contains(&record_type)
    }

    /// Resolves a type name to its wire code.
    ///
    /// Names are matched case-insensitively against the enabled types. The
    /// generic `TYPE<n>` form is always accepted so that any code produced by
    /// decoding can be encoded again.
    pub fn resolve(&self, name: &str) -> Result<u16, RegistryError> {
        if let Some(record_type) = self
            .types
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
        {
            return Ok(record_type.to_u16());
        }

        parse_generic(name).ok_or_else(|| RegistryError::UnknownRecordType(name.to_string()))
    }

    /// Returns the enabled type carrying `code`, if any.
    pub fn lookup(&self, code: u16) -> Option<RecordType> {
        self.types.iter().copied().find(|t| t.to_u16() == code)
    }

    /// Name to report for `code`: the registry name, or `TYPE<code>`.
    pub fn name_for(&self, code: u16) -> String {
        match self.lookup(code) {
            Some(record_type) => record_type.as_str().to_string(),
            None => format!("{}{}", GENERIC_PREFIX, code),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.types.iter().map(|t| (t.as_str(), t.to_u16()))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_generic(name: &str) -> Option<u16> {
    let prefix = name.get(..GENERIC_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(GENERIC_PREFIX) {
        return None;
    }

    let digits = &name[GENERIC_PREFIX.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
