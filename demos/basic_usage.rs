// ============================================================================
// Basic Usage Example
// ============================================================================

use rust_decimal::Decimal;
use spark_decimal::prelude::*;

fn main() {
    println!("=== Spark Decimal Kernel Example ===\n");

    // Bind a division once, the way a query host would at plan time
    let lhs_ty = DecimalType::new(5, 2).unwrap();
    let rhs_ty = DecimalType::new(5, 2).unwrap();
    let div = BoundDivision::bind(lhs_ty, rhs_ty);

    println!(
        "Bound {} / {} -> {} (scale adjustment {}, {:?})\n",
        lhs_ty,
        rhs_ty,
        div.result_type(),
        div.scale_adjustment(),
        div.physical_width(),
    );

    // Evaluate a few rows, including NULLs and a zero divisor
    println!("Dividing rows...");
    let rows: [(Option<Decimal>, Option<Decimal>); 4] = [
        (Some(Decimal::new(12_345, 2)), Some(Decimal::new(200, 2))),
        (Some(Decimal::new(100, 2)), Some(Decimal::new(300, 2))),
        (Some(Decimal::new(4_200, 2)), Some(Decimal::ZERO)),
        (None, Some(Decimal::new(100, 2))),
    ];

    let result_scale = div.result_type().scale();
    for (lhs, rhs) in rows {
        let a = lhs.map(|d| DecimalScalar::from_decimal(d, lhs_ty).unwrap().widen());
        let b = rhs.map(|d| DecimalScalar::from_decimal(d, rhs_ty).unwrap().widen());
        match div.evaluate(a, b) {
            Some(value) => println!(
                "  {:?} / {:?} = {}",
                lhs,
                rhs,
                format_scaled(value, result_scale)
            ),
            None => println!("  {lhs:?} / {rhs:?} = NULL"),
        }
    }

    // Aggregate the same column with SUM and AVG
    println!("\nAggregating 1.00, 2.00, 4.00 ...");
    let sum = BoundSum::bind(lhs_ty);
    let avg = BoundAvg::bind(lhs_ty);

    let mut sum_state = sum.init_state();
    let mut avg_state = avg.init_state();
    for value in [100i128, 200, 400] {
        sum_state.update(value);
        avg_state.update(value);
    }

    let total = sum.finalize(&sum_state).unwrap();
    let mean = avg.finalize(&avg_state).unwrap();
    println!(
        "  SUM -> {} : {}",
        sum.result_type(),
        format_scaled(total.widen(), sum.result_type().scale())
    );
    println!(
        "  AVG -> {} : {}",
        avg.result_type(),
        format_scaled(mean.widen(), avg.result_type().scale())
    );

    // Empty groups finalize to NULL, not zero
    println!("\nEmpty group:");
    println!("  SUM -> {:?}", sum.finalize(&sum.init_state()));
    println!("  AVG -> {:?}", avg.finalize(&avg.init_state()));
}
