use nsblock::declare::{DeclarationSite, InstallTarget, Keyword, ScopeEndFinalizer, Trampoline};
use nsblock::lexer::insignificant_len;

/// In-memory parser state standing in for a host.
pub struct MockSite {
    pub buffer: String,
    pub offset: usize,
    pub keyword: String,
    pub namespace: String,
    pub finalizers: Vec<(usize, ScopeEndFinalizer)>,
}

impl MockSite {
    /// Site just past the first `keyword` in `source`, in namespace `main`.
    pub fn after_keyword(source: &str, keyword: &str) -> Self {
        let offset = source.find(keyword).map_or(0, |at| at + keyword.len());
        Self::at(source, offset, keyword)
    }

    pub fn at(source: &str, offset: usize, keyword: &str) -> Self {
        Self {
            buffer: source.to_string(),
            offset,
            keyword: keyword.to_string(),
            namespace: "main".to_string(),
            finalizers: Vec::new(),
        }
    }

    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }
}

impl DeclarationSite for MockSite {
    fn buffer(&self) -> &str {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn insignificant_len(&self, at: usize) -> usize {
        insignificant_len(&self.buffer, at)
    }

    fn innermost_namespace(&self) -> &str {
        &self.namespace
    }

    fn register_block_finalizer(&mut self, anchor: usize, finalizer: ScopeEndFinalizer) {
        self.finalizers.push((anchor, finalizer));
    }
}

/// Install target that only records what it was given.
#[derive(Default)]
pub struct RecordingTarget {
    pub keywords: Vec<(String, String, Keyword)>,
    pub trampolines: Vec<(String, String, Trampoline)>,
}

impl RecordingTarget {
    pub fn aliases(&self) -> Vec<&str> {
        self.keywords
            .iter()
            .map(|(_, alias, _)| alias.as_str())
            .collect()
    }
}

impl InstallTarget for RecordingTarget {
    fn install_keyword(&mut self, namespace: &str, alias: &str, keyword: Keyword) {
        self.keywords
            .push((namespace.to_string(), alias.to_string(), keyword));
    }

    fn install_trampoline(&mut self, namespace: &str, alias: &str, trampoline: Trampoline) {
        self.trampolines
            .push((namespace.to_string(), alias.to_string(), trampoline));
    }
}
