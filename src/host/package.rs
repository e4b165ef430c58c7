/// A resolved package inside the solver's plan.
///
/// Mutable by design: the post-solve rewrite edits distribution and version
/// fields in place, it never replaces the object or the operation kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub version: String,
    pub pretty_version: String,
    pub source_type: Option<String>,
    pub source_url: Option<String>,
    pub dist_type: Option<String>,
    pub dist_url: Option<String>,
    pub dist_reference: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into();
        Package {
            name: name.into(),
            pretty_version: version.clone(),
            version,
            source_type: None,
            source_url: None,
            dist_type: None,
            dist_url: None,
            dist_reference: None,
        }
    }

    pub fn replace_version(
        &mut self,
        version: impl Into<String>,
        pretty_version: impl Into<String>,
    ) {
        self.version = version.into();
        self.pretty_version = pretty_version.into();
    }

    pub fn clear_source(&mut self) {
        self.source_type = None;
        self.source_url = None;
    }
}
