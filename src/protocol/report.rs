//! Response lines sent back to the backend.

use ufmt::{uwrite, uWrite};

fn report<W: uWrite>(out: &mut W, tag: &str, values: &[u16]) -> Result<(), W::Error> {
    uwrite!(out, "{}", tag)?;
    for value in values {
        uwrite!(out, " {}", *value)?;
    }
    uwrite!(out, "\n")
}

/// `v <v0> <v1> <v2> <v3>` - current readings
pub fn values<W: uWrite>(out: &mut W, values: &[u16]) -> Result<(), W::Error> {
    report(out, "v", values)
}

/// `t <t0> <t1> <t2> <t3>` - current thresholds
pub fn thresholds<W: uWrite>(out: &mut W, thresholds: &[u16]) -> Result<(), W::Error> {
    report(out, "t", thresholds)
}
