#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Column labels of an annotated start-codon interval table.
///
/// Each field holds the header label used for that column. `ColNames::default()`
/// gives the labels of the uBERTa dataset; override single fields with struct
/// update syntax when a table uses different headers.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColNames {
    pub chrom: String,
    pub start: String,
    pub end: String,
    pub codon: String,
    pub strand: String,
    pub gene_id: String,
    pub group: String,
    pub level: String,
    pub analyzed: String,
    pub positive: String,
}

impl ColNames {
    /// Field names in column order.
    pub const FIELDS: [&'static str; 10] = [
        "chrom", "start", "end", "codon", "strand", "gene_id", "group", "level", "analyzed",
        "positive",
    ];

    /// Default labels in column order.
    pub const DEFAULT_LABELS: [&'static str; 10] = [
        "Chrom",
        "StartCodonStart",
        "StartCodonEnd",
        "StartCodonFetched",
        "Strand",
        "GeneIDUnique",
        "Group",
        "LevelStartCodonStartFetchedAround2",
        "IsAnalyzed",
        "IsPositive",
    ];

    /// Current labels in column order.
    pub fn labels(&self) -> [&str; 10] {
        [
            self.chrom.as_str(),
            self.start.as_str(),
            self.end.as_str(),
            self.codon.as_str(),
            self.strand.as_str(),
            self.gene_id.as_str(),
            self.group.as_str(),
            self.level.as_str(),
            self.analyzed.as_str(),
            self.positive.as_str(),
        ]
    }

    /// Label of the column backing `field`, if such a field exists.
    pub fn label(&self, field: &str) -> Option<&str> {
        Self::FIELDS
            .iter()
            .position(|f| *f == field)
            .map(|idx| self.labels()[idx])
    }

    ///
    /// Find the column index of a header label.
    ///
    /// Useful for mapping a table's header row onto fields.
    ///
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels().iter().position(|l| *l == label)
    }
}

impl Default for ColNames {
    fn default() -> Self {
        let [chrom, start, end, codon, strand, gene_id, group, level, analyzed, positive] =
            Self::DEFAULT_LABELS.map(String::from);
        ColNames {
            chrom,
            start,
            end,
            codon,
            strand,
            gene_id,
            group,
            level,
            analyzed,
            positive,
        }
    }
}
