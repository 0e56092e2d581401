//! The Content Registry: a fixed, two-namespace catalog of content units.
//!
//! Every addressable unit is either a **workflow** step (invoked in
//! sequence during guided authoring) or a **reference** document (consulted
//! on demand). The two namespaces are disjoint in their external addressing:
//! reference entries carry the `reference-` prefix, workflow entries are
//! addressed by bare name. External names are computed once at registration
//! so prefix logic lives in exactly one place.
//!
//! The registry is immutable for the process lifetime. `Catalog::builtin()`
//! returns the fixed production catalog; tests build independent catalogs
//! from fabricated entries with `Catalog::new`.

use std::path::Path;

/// Prefix distinguishing reference-namespace names in external addressing.
pub const REFERENCE_PREFIX: &str = "reference-";

/// Which namespace a catalog entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A sequential workflow step; invocations are directive-wrapped.
    Workflow,
    /// A reference document; invocations return the raw content.
    Reference,
}

/// One addressable content unit.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    name: String,
    external_name: String,
    relative_path: String,
    description: String,
    kind: EntryKind,
}

impl CatalogEntry {
    /// Create a workflow entry; externally addressed by its bare name.
    pub fn workflow(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            external_name: name.clone(),
            name,
            relative_path: relative_path.into(),
            description: description.into(),
            kind: EntryKind::Workflow,
        }
    }

    /// Create a reference entry; externally addressed with the
    /// `reference-` prefix.
    pub fn reference(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            external_name: format!("{REFERENCE_PREFIX}{name}"),
            name,
            relative_path: relative_path.into(),
            description: description.into(),
            kind: EntryKind::Reference,
        }
    }

    /// Bare name within the entry's namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Externally addressable name.
    pub fn external_name(&self) -> &str {
        &self.external_name
    }

    /// Project-relative path to the backing file.
    pub fn relative_path(&self) -> &Path {
        Path::new(&self.relative_path)
    }

    /// Human-readable summary for capability listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Namespace of this entry.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }
}

/// Immutable, ordered set of catalog entries.
///
/// Listing order is namespace-stable: workflow entries first, then reference
/// entries, insertion order preserved within each namespace.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, partitioning workflow entries ahead of
    /// reference entries while preserving insertion order within each
    /// namespace.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let (workflow, reference): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|entry| entry.kind == EntryKind::Workflow);
        let mut entries = workflow;
        entries.extend(reference);
        Self { entries }
    }

    /// The fixed production catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogEntry::workflow(
                "analyze-app",
                "prompts/1-analyze-app.md",
                "Analyze application structure and create test strategy",
            ),
            CatalogEntry::workflow(
                "generate-test-plan",
                "prompts/2-generate-test-plan.md",
                "Generate comprehensive test plan with scenarios",
            ),
            CatalogEntry::workflow(
                "setup-infrastructure",
                "prompts/3-setup-infrastructure.md",
                "Setup test infrastructure with fixtures and config",
            ),
            CatalogEntry::workflow(
                "generate-page-objects",
                "prompts/4-generate-page-objects.md",
                "Generate page object models with optimal selectors",
            ),
            CatalogEntry::workflow(
                "implement-test-suite",
                "prompts/5-implement-test-suite.md",
                "Implement complete test suite with best practices",
            ),
            CatalogEntry::workflow(
                "review-and-optimize",
                "prompts/6-review-and-optimize.md",
                "Review and optimize test suite for quality and performance",
            ),
            CatalogEntry::workflow(
                "add-accessibility",
                "prompts/optional-add-accessibility.md",
                "Add accessibility testing to existing suite",
            ),
            CatalogEntry::workflow(
                "add-api-testing",
                "prompts/optional-add-api-testing.md",
                "Add API testing capabilities to test suite",
            ),
            CatalogEntry::reference(
                "core-principles",
                "prompts/reference/core-principles.md",
                "Core testing principles that guide all implementations",
            ),
            CatalogEntry::reference(
                "workflow-overview",
                "prompts/reference/workflow-overview.md",
                "High-level workflow guide and prompt relationships",
            ),
            CatalogEntry::reference(
                "mcp-setup",
                "prompts/reference/mcp-setup.md",
                "MCP setup and usage patterns",
            ),
            CatalogEntry::reference(
                "selector-strategies",
                "prompts/reference/selector-strategies.md",
                "Selector strategies and HTML quality scoring",
            ),
            CatalogEntry::reference(
                "fixture-patterns",
                "prompts/reference/fixture-patterns.md",
                "Fixture patterns for parallel execution",
            ),
        ])
    }

    /// All entries in listing order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Ordered `(external_name, description)` pairs for capability listings.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.external_name(), entry.description()))
    }

    /// Look up an entry by external name.
    ///
    /// Names carrying the reference prefix are stripped and resolved in the
    /// reference namespace; everything else resolves in the workflow
    /// namespace.
    pub fn lookup(&self, external_name: &str) -> Option<&CatalogEntry> {
        let (kind, bare) = match external_name.strip_prefix(REFERENCE_PREFIX) {
            Some(bare) => (EntryKind::Reference, bare),
            None => (EntryKind::Workflow, external_name),
        };
        self.entries
            .iter()
            .find(|entry| entry.kind == kind && entry.name == bare)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
