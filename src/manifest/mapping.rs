//! Package name to documentation filename mapping.

use super::ProjectRecord;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::warn;

/// Filesystem-safe documentation filename stem for a package.
///
/// `@yuants/data-series` becomes `@yuants-data-series`: the `@` is kept and every
/// `/` is replaced with `-`.
pub fn package_doc_stem(package_name: &str) -> String {
    package_name.replace('/', "-")
}

/// Lookup from package name to documentation filename stem.
///
/// Built once from the manifest's projects and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMapping {
    stems: BTreeMap<String, String>,
}

impl PackageMapping {
    /// Build the mapping from loaded project records.
    ///
    /// Package names are expected to be unique; on a duplicate the first record wins.
    pub fn from_projects(projects: &[ProjectRecord]) -> Self {
        let mut stems = BTreeMap::new();
        for project in projects {
            match stems.entry(project.package_name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(package_doc_stem(&project.package_name));
                }
                Entry::Occupied(_) => {
                    warn!(
                        "Duplicate package '{}' in manifest, keeping the first entry",
                        project.package_name
                    );
                }
            }
        }
        Self { stems }
    }

    /// Filename stem for `package_name`, if the package is known.
    pub fn get(&self, package_name: &str) -> Option<&str> {
        self.stems.get(package_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Iterate `(package_name, stem)` pairs in package name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stems.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
