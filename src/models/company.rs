use std::fmt;

use serde::{Deserialize, Serialize};

/// The enumerated set of upstream company catalogs this service queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Company {
    Amz,
    Flp,
    Snp,
    Myn,
    Azo,
}

impl Company {
    // canonical order, also the merge order for overlapping updates
    pub const ALL: [Company; 5] = [
        Company::Amz,
        Company::Flp,
        Company::Snp,
        Company::Myn,
        Company::Azo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Amz => "AMZ",
            Company::Flp => "FLP",
            Company::Snp => "SNP",
            Company::Myn => "MYN",
            Company::Azo => "AZO",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
