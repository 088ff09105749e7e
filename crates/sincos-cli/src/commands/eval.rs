//! Evaluate one angle and show how it was reduced.

use crate::measure::Precision;
use clap::Args;
use sincos_core::{Series, absolute, cos_fast, reduce, sin_fast, sincos_fast};

/// Evaluate the fast functions at a single angle.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Angle in radians
    #[arg(value_name = "ANGLE", allow_negative_numbers = true)]
    angle: f64,

    /// Precision to evaluate in
    #[arg(short, long, value_enum, default_value = "f64")]
    precision: Precision,
}

/// Values printed by `eval`, all widened to f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Input after rounding to the requested precision.
    pub angle: f64,
    /// `sin_fast`
    pub sin: f64,
    /// `cos_fast`
    pub cos: f64,
    /// `sincos_fast`
    pub sincos: (f64, f64),
    /// libm sine
    pub sin_ref: f64,
    /// libm cosine
    pub cos_ref: f64,
}

/// Evaluate `angle` at `precision`.
pub fn evaluate(angle: f64, precision: Precision) -> Evaluation {
    match precision {
        Precision::F64 => Evaluation {
            angle,
            sin: sin_fast(angle),
            cos: cos_fast(angle),
            sincos: sincos_fast(angle),
            sin_ref: libm::sin(angle),
            cos_ref: libm::cos(angle),
        },
        Precision::F32 => {
            let x = angle as f32;
            let (s, c) = sincos_fast(x);
            Evaluation {
                angle: f64::from(x),
                sin: f64::from(sin_fast(x)),
                cos: f64::from(cos_fast(x)),
                sincos: (f64::from(s), f64::from(c)),
                sin_ref: f64::from(libm::sinf(x)),
                cos_ref: f64::from(libm::cosf(x)),
            }
        }
    }
}

/// Run the eval command.
pub fn run(args: EvalArgs) -> anyhow::Result<()> {
    let e = evaluate(args.angle, args.precision);
    // f32 inputs are reduced after widening.
    let r = reduce(e.angle);

    println!("Angle:        {} ({})", e.angle, args.precision);
    println!();
    println!("Reduction");
    println!("---------");
    println!("  Octant:       {} (half-octant {})", r.octant, r.half_octant());
    println!(
        "  Series:       {}",
        match r.series {
            Series::Sine => "sine",
            Series::Cosine => "cosine",
        }
    );
    println!("  Sin sign:     {}", if r.sin_positive { "+" } else { "-" });
    println!("  Cos sign:     {}", if r.cos_positive { "+" } else { "-" });
    println!("  Reduced x:    {:.17}", r.x);
    println!();
    println!("Results");
    println!("-------");
    println!(
        "  sin_fast:     {:>22.17}   libm: {:>22.17}   err: {:e}",
        e.sin,
        e.sin_ref,
        absolute(e.sin - e.sin_ref)
    );
    println!(
        "  cos_fast:     {:>22.17}   libm: {:>22.17}   err: {:e}",
        e.cos,
        e.cos_ref,
        absolute(e.cos - e.cos_ref)
    );
    println!("  sincos_fast:  ({:.17}, {:.17})", e.sincos.0, e.sincos.1);
    Ok(())
}
