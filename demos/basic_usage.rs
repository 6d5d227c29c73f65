//! Basic usage example for the gfcalc library.
//!
//! This example demonstrates arithmetic in a prime field, in an extension
//! field, and a batched search for irreducible polynomials.

use gfcalc::gf::ring::format_polynomial;
use gfcalc::gf::{Evaluate, FieldExtension, SimpleField};
use gfcalc::search::{IrreducibleSearch, MemoryStore, PolynomialStore, SearchConfig};
use gfcalc::utils::parse_coefficients;

fn main() {
    println!("gfcalc - Basic Usage Example\n");

    // Prime field GF(5)
    let gf5 = SimpleField::new(5).expect("5 is prime");
    let a = gf5.element(3);
    let b = gf5.element(4);
    println!("{gf5}:");
    println!("  {a} + {b} = {}", a + b);
    println!("  {a} * {b} = {}", a * b);
    println!("  {a} / {b} = {}", a / b);
    println!("  {a}^-1 = {}", a.inverse().expect("3 is nonzero"));

    let f = gf5.polynomial(&[1, 0, 1]);
    let g = gf5.polynomial(&[1, 2]);
    let (q, r) = f.div_rem(&g).expect("divisor is nonzero");
    println!("  ({f}) / ({g}) = {q} remainder {r}");
    println!("  ({f})(2) = {}", f.calculate_value(&gf5.element(2)).expect("same field"));
    println!();

    // Extension field GF(2^3) from user-style input
    let modulus = parse_coefficients("1, 0, 1, 1").expect("valid coefficients");
    let gf8 = FieldExtension::new(2, &modulus).expect("x^3 + x + 1 is irreducible");
    println!("{gf8} with modulus {}:", format_polynomial(gf8.modulus()));

    let x = gf8.element(&[1, 1, 1]);
    let inv = x.inverse().expect("nonzero element");
    println!("  ({x})^-1 = {inv}");
    println!("  ({x}) * ({inv}) = {}", x.clone() * inv.clone());

    print!("  powers of x:");
    for k in 0..7u128 {
        print!(" [{}]", gf8.x().pow(k));
    }
    println!("\n");

    // Reducible moduli are rejected
    match FieldExtension::new(2, &[1, 0, 0, 1]) {
        Ok(_) => println!("unexpectedly accepted x^3 + 1"),
        Err(e) => println!("Rejected: {e}\n"),
    }

    // Batched search for irreducible polynomials of degree 4 over GF(3)
    let search = IrreducibleSearch::new(3, 4)
        .and_then(|s| s.with_config(SearchConfig::new().batch_size(40)))
        .expect("valid search parameters");
    let mut store = MemoryStore::new();

    println!(
        "Searching degree 4 over GF(3): {} candidates",
        search.total_candidates().unwrap_or_default()
    );
    let mut offset = 0;
    loop {
        let batch = search
            .run_batch_with_store(offset, &mut store)
            .expect("batch succeeds");
        println!(
            "  batch at {:>3}: scanned {:>2}, found {:>2}",
            batch.offset,
            batch.scanned,
            batch.found.len()
        );
        if batch.exhausted {
            break;
        }
        offset = batch.next_offset;
    }

    let found = store.load(3, 4).expect("in-memory store");
    println!("Found {} irreducible polynomials, first few:", found.len());
    for poly in found.iter().take(5) {
        println!("  {}", format_polynomial(poly));
    }
}
