// src/report.rs
use crate::mc::estimator::Estimate;
use std::fmt;
use std::io::{self, Write};

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} pairs of random numbers between 1 and {}",
            self.pairs, self.max_number
        )?;
        writeln!(f, "Number of co-prime pairs: {}", self.coprime_count)?;
        writeln!(f, "----------------------------")?;
        writeln!(f, "Pi approximation is {:.6}", self.pi_estimate)?;
        writeln!(f, "Pi real value is {:.6}", self.pi_reference)?;
        write!(f, "Percentage difference is {:.6}%", self.percentage_difference)
    }
}

/// Write the labelled report for `estimate`, one line per value
pub fn write_report<W: Write>(out: &mut W, estimate: &Estimate) -> io::Result<()> {
    writeln!(out, "{}", estimate)?;
    out.flush()
}
