use crate::HpoTermId;

/// The age of onset of a phenotypic feature
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    /// Present at birth
    Congenital,
    /// Onset within the first 28 days of life
    Neonatal,
    /// Onset within the first year of life
    Infantile,
    /// Onset during childhood or juvenile onset
    Childhood,
    /// Onset from adolescence onwards
    Adult,
    /// No or unrecognized onset information
    #[default]
    Unknown,
}

impl Onset {
    /// Maps the `Age of Onset Name` of the annotation data to an [`Onset`]
    ///
    /// The comparison is case-insensitive. Unrecognized labels, including
    /// empty ones, are [`Onset::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nosology::annotations::Onset;
    ///
    /// assert_eq!(Onset::from_label("Congenital onset"), Onset::Congenital);
    /// assert_eq!(Onset::from_label("onset in infancy"), Onset::Infantile);
    /// assert_eq!(Onset::from_label("Late onset"), Onset::Adult);
    /// assert_eq!(Onset::from_label(""), Onset::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Onset {
        match label.trim().to_ascii_lowercase().as_str() {
            "congenital onset" => Onset::Congenital,
            "neonatal onset" => Onset::Neonatal,
            "infantile onset" | "onset in infancy" => Onset::Infantile,
            "childhood onset" | "juvenile onset" => Onset::Childhood,
            "onset in adolescence"
            | "adult onset"
            | "young adult onset"
            | "onset in early adulthood"
            | "late onset" => Onset::Adult,
            _ => Onset::Unknown,
        }
    }
}

/// A single phenotype annotation of a disease
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationItem {
    term: HpoTermId,
    negated: bool,
    onset: Onset,
}

impl AnnotationItem {
    /// Constructs a new [`AnnotationItem`]
    pub fn new(term: HpoTermId, negated: bool, onset: Onset) -> Self {
        Self {
            term,
            negated,
            onset,
        }
    }

    /// The annotated term
    pub fn term(&self) -> HpoTermId {
        self.term
    }

    /// Returns `true` if the disease does **not** have the feature
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The age of onset of the feature
    pub fn onset(&self) -> Onset {
        self.onset
    }
}
