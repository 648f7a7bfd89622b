use std::collections::HashSet;

use serde::Deserialize;

use crate::connector::ProjectCatalog;
use crate::{Project, ProjectId, ProjectKind, TokenInfo, TvlError, UnixTime};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    layer2s: Vec<Project>,
    #[serde(default)]
    layer3s: Vec<Project>,
    #[serde(default)]
    bridges: Vec<Project>,
    #[serde(default)]
    tokens: Vec<TokenInfo>,
}

/// Immutable catalog of projects and the token registry, searched in
/// layer 2, layer 3, bridge order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    projects: Vec<Project>,
    tokens: Vec<TokenInfo>,
}

impl StaticCatalog {
    /// Build a catalog from project records and a token registry.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if two projects share an identifier, two
    /// registry entries share a `(chain, symbol)` pair, or a timestamp lies
    /// outside the calendar range.
    pub fn new(mut projects: Vec<Project>, tokens: Vec<TokenInfo>) -> Result<Self, TvlError> {
        let mut ids: HashSet<&ProjectId> = HashSet::new();
        for p in &projects {
            if !ids.insert(&p.id) {
                return Err(TvlError::InvalidConfig(format!("duplicate project id {}", p.id)));
            }
            check_timestamp(p.created_at, || format!("createdAt of project {}", p.id))?;
            for e in &p.escrows {
                check_timestamp(e.since_timestamp, || {
                    format!("sinceTimestamp of escrow {} in {}", e.address, p.id)
                })?;
            }
        }
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for t in &tokens {
            check_timestamp(t.since_timestamp, || {
                format!("sinceTimestamp of token {} on {}", t.symbol, t.chain)
            })?;
            if !seen.insert((t.chain.as_str(), t.symbol.as_str())) {
                return Err(TvlError::InvalidConfig(format!(
                    "duplicate token {} on {}",
                    t.symbol, t.chain
                )));
            }
        }
        projects.sort_by_key(|p| match p.kind {
            ProjectKind::Layer2 => 0u8,
            ProjectKind::Layer3 => 1,
            ProjectKind::Bridge => 2,
        });
        Ok(Self { projects, tokens })
    }

    /// Load a catalog from JSON with `layer2s`, `layer3s`, `bridges` and `tokens` arrays.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for malformed JSON, for a project listed under
    /// the wrong kind, or for the duplicates rejected by [`StaticCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self, TvlError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| TvlError::InvalidConfig(e.to_string()))?;
        let lists = [
            (ProjectKind::Layer2, file.layer2s),
            (ProjectKind::Layer3, file.layer3s),
            (ProjectKind::Bridge, file.bridges),
        ];
        let mut projects = Vec::new();
        for (kind, list) in lists {
            for p in list {
                if p.kind != kind {
                    return Err(TvlError::InvalidConfig(format!(
                        "project {} has kind {:?} but is listed under {:?}",
                        p.id, p.kind, kind
                    )));
                }
                projects.push(p);
            }
        }
        Self::new(projects, file.tokens)
    }

    /// All projects in search order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }
}

fn check_timestamp(ts: UnixTime, what: impl FnOnce() -> String) -> Result<(), TvlError> {
    if ts.is_representable() {
        Ok(())
    } else {
        Err(TvlError::InvalidConfig(format!(
            "{} out of range: {}",
            what(),
            ts.to_seconds()
        )))
    }
}

impl ProjectCatalog for StaticCatalog {
    fn find_project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    fn token_registry(&self) -> &[TokenInfo] {
        &self.tokens
    }
}
