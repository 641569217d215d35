use crate::{HpoError, HpoResult, HpoTermId};

/// Requires a minimum number of positive annotations below a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumCount {
    term: HpoTermId,
    minimum: usize,
}

impl MinimumCount {
    /// Constructs a new [`MinimumCount`] constraint
    pub fn new(term: HpoTermId, minimum: usize) -> Self {
        Self { term, minimum }
    }

    /// The term the annotations must descend from (or be equal to)
    pub fn term(&self) -> HpoTermId {
        self.term
    }

    /// The minimum number of matching annotations
    pub fn minimum(&self) -> usize {
        self.minimum
    }
}

/// One alternative rule predicate of a [`Category`](crate::Category)
///
/// A `Definition` is an immutable value. It is created either by the rule
/// file parser or in code through a [`DefinitionBuilder`]. Evaluation
/// against a disease happens in [`satisfies`](crate::nosology::satisfies).
///
/// # Examples
///
/// ```
/// use nosology::{Definition, HpoTermId};
///
/// let mut builder = Definition::builder();
/// builder
///     .gene("FGFR3")
///     .excluded(HpoTermId::from(1363u32));
/// let definition = builder.build();
///
/// assert_eq!(definition.genes(), ["FGFR3"]);
/// assert_eq!(definition.excluded(), [HpoTermId::from(1363u32)]);
/// assert!(definition.required().is_empty());
/// assert!(!definition.is_trivial());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Definition {
    genes: Vec<String>,
    excluded: Vec<HpoTermId>,
    required: Vec<HpoTermId>,
    optional: Vec<HpoTermId>,
    minimum_counts: Vec<MinimumCount>,
    onset_feature: Option<HpoTermId>,
}

impl Definition {
    /// Returns a new [`DefinitionBuilder`]
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::default()
    }

    /// Gene symbols of which at least one must be a disease gene
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    /// Terms that must not be present, including their descendants
    pub fn excluded(&self) -> &[HpoTermId] {
        &self.excluded
    }

    /// Terms that must all be present
    pub fn required(&self) -> &[HpoTermId] {
        &self.required
    }

    /// Terms of which at least one must be present
    pub fn optional(&self) -> &[HpoTermId] {
        &self.optional
    }

    /// Minimum count constraints
    pub fn minimum_counts(&self) -> &[MinimumCount] {
        &self.minimum_counts
    }

    /// A term that must be present with neonatal or congenital onset
    pub fn onset_feature(&self) -> Option<HpoTermId> {
        self.onset_feature
    }

    /// Returns `true` if the definition has no constraint at all
    ///
    /// A trivial definition is satisfied by every disease.
    pub fn is_trivial(&self) -> bool {
        self == &Definition::default()
    }
}

/// Collects the constraints of a [`Definition`]
#[derive(Debug, Default, Clone)]
pub struct DefinitionBuilder {
    inner: Definition,
}

impl DefinitionBuilder {
    /// Adds a gene symbol
    pub fn gene(&mut self, symbol: &str) -> &mut Self {
        self.inner.genes.push(symbol.to_string());
        self
    }

    /// Adds a term that must not be present
    pub fn excluded(&mut self, term: HpoTermId) -> &mut Self {
        self.inner.excluded.push(term);
        self
    }

    /// Adds a term that must be present
    pub fn required(&mut self, term: HpoTermId) -> &mut Self {
        self.inner.required.push(term);
        self
    }

    /// Adds a term to the optional terms
    pub fn optional(&mut self, term: HpoTermId) -> &mut Self {
        self.inner.optional.push(term);
        self
    }

    /// Requires at least `minimum` positive annotations below `term`
    pub fn minimum_count(&mut self, term: HpoTermId, minimum: usize) -> &mut Self {
        self.inner
            .minimum_counts
            .push(MinimumCount::new(term, minimum));
        self
    }

    /// Sets the term that must be present with neonatal or congenital onset
    ///
    /// # Errors
    ///
    /// [`HpoError::InvalidRule`] if the onset feature was set before
    pub fn onset_feature(&mut self, term: HpoTermId) -> HpoResult<&mut Self> {
        if let Some(previous) = self.inner.onset_feature {
            return Err(HpoError::InvalidRule(format!(
                "only one neonatal feature is allowed per definition, found {previous} and {term}"
            )));
        }
        self.inner.onset_feature = Some(term);
        Ok(self)
    }

    /// Returns `true` if no constraint was added yet
    pub fn is_empty(&self) -> bool {
        self.inner.is_trivial()
    }

    /// Returns the [`Definition`] with all constraints added so far
    pub fn build(&self) -> Definition {
        self.inner.clone()
    }
}
