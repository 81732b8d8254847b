/// Whether the matched token is part of the returned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InclusionPolicy {
    /// Keep the token's own characters in the result
    #[default]
    Including,
    /// Strip the token from the result
    Excluding,
}

impl InclusionPolicy {
    pub fn includes(self) -> bool {
        matches!(self, InclusionPolicy::Including)
    }
}

impl From<bool> for InclusionPolicy {
    fn from(including: bool) -> Self {
        if including {
            InclusionPolicy::Including
        } else {
            InclusionPolicy::Excluding
        }
    }
}
