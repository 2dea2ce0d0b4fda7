//! Analysis of finished stimuli

/// Element count, LOC, LOCI and LOCE
pub mod complexity;
