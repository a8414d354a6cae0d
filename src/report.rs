//! Output-sink serialization of analysis results.
//!
//! Drivers decide where the text goes; these writers only fix the shape.
//! The tab-separated layouts and the parenthesized difference-expression
//! form are consumed by external reporting and must stay byte-stable.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::closed_form::ClosedForm;
use crate::difference::{DifferenceExpr, FeatureDifference};
use crate::systems::Systems;
use crate::taxonomy::Taxonomy;
use crate::types::{difference_name, SystemId};

/// Writes the statistics header: the selected model, the per-category
/// feature counts, and the system/difference space sizes.
pub fn write_header(taxonomy: &Taxonomy, w: &mut impl Write) -> io::Result<()> {
    let c = taxonomy.counts();
    writeln!(w, "{}\tselected model", taxonomy.model())?;
    writeln!(w, "{}\tT\tactual total number of features", c.t)?;
    writeln!(w, "{}\tF\tnumber of independent features", c.f)?;
    writeln!(
        w,
        "{}\tDF\tactual total number of inherently dependent features",
        c.df
    )?;
    writeln!(w, "{}\tO\tactual number of or-features", c.o)?;
    writeln!(w, "{}\tA\tactual number of and-features", c.a)?;
    writeln!(w, "{}\tN\tactual number of not-features", c.n)?;
    writeln!(w, "{}\tON\tactual number of or-not-features", c.on)?;
    writeln!(w, "{}\tAN\tactual number of and-not-features", c.an)?;
    writeln!(w, "{}\tS\tnumber of systems of SPL", c.s)?;
    writeln!(w, "{}\tD\tnumber of all set differences of SPL systems", c.d)
}

/// Writes one line per system: its name, then every defining feature,
/// each followed by a tab.
pub fn write_systems(systems: &Systems, w: &mut impl Write) -> io::Result<()> {
    for (id, set) in systems.iter() {
        write!(w, "{}\t", id)?;
        for feature in set {
            write!(w, "{}\t", feature)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes one line per isolated feature:
/// `{name}\t( Si & Sj ) \ ( Sk | Sl )`.
pub fn write_isolations(
    isolations: &BTreeMap<String, DifferenceExpr>,
    w: &mut impl Write,
) -> io::Result<()> {
    for (feature, expr) in isolations {
        writeln!(w, "{}\t{}", feature, expr)?;
    }
    Ok(())
}

/// Writes one line per valid difference found by the exhaustive search:
/// `E{id}\t{name}\t( ... ) \ ( ... )`.
pub fn write_differences(
    differences: &[FeatureDifference],
    w: &mut impl Write,
) -> io::Result<()> {
    for entry in differences {
        writeln!(
            w,
            "{}\t{}\t{}",
            difference_name(entry.id),
            entry.feature,
            entry.difference
        )?;
    }
    Ok(())
}

/// Writes one line per feature of the closed-form strategy:
/// `{name}\t{S-bit value, MSB first}`.
pub fn write_bitstrings(closed_form: &ClosedForm, w: &mut impl Write) -> io::Result<()> {
    for (name, bits) in closed_form.features() {
        writeln!(w, "{}\t{}", name, bits)?;
    }
    Ok(())
}

/// Writes the independent features' membership lines in the same
/// `{name}\t{S-bit value, MSB first}` shape, but computes every bit with
/// the constant-space arithmetic query instead of materializing a value.
pub fn write_independent_bitstrings(taxonomy: &Taxonomy, w: &mut impl Write) -> io::Result<()> {
    let s = taxonomy.counts().s;
    for &id in taxonomy.ids() {
        write!(w, "{}\t", id)?;
        for index in (1..=s).rev() {
            let bit = ClosedForm::membership_bit(id, SystemId::new(index));
            write!(w, "{}", if bit { '1' } else { '0' })?;
        }
        writeln!(w)?;
    }
    Ok(())
}
