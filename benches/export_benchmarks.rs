//! Performance benchmarks for the expense exporter.
//!
//! Covers the validation pass on its own and the full render for each
//! format, at several batch sizes.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use expense_exporter::export::{ExportFormat, Exporter, JsonDateStyle, validate_batch};
use expense_exporter::models::{Employee, Expense, ValidationMode};
use expense_exporter::rules::resolve_limit;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal")
}

/// Creates one employee per validation mode, cycling by id.
fn create_employees(count: u32) -> Vec<Employee> {
    (1..=count)
        .map(|id| {
            let mut employee = Employee {
                id,
                full_name: format!("Employee {id:04}"),
                position: "Developer".to_string(),
                salary: dec("2500"),
                validation_mode: ValidationMode::FixedAmount,
                max_allowed_amount: dec("300"),
                max_percent_of_salary: Decimal::ZERO,
                custom_formula: None,
            };
            match id % 3 {
                1 => {
                    employee.validation_mode = ValidationMode::PercentOfSalary;
                    employee.max_percent_of_salary = dec("0.2");
                }
                2 => {
                    employee.validation_mode = ValidationMode::CustomFormula;
                    employee.custom_formula = Some("AMOUNT <= 0.15 * SALARY".to_string());
                }
                _ => {}
            }
            employee
        })
        .collect()
}

/// Creates expenses spread across `employee_count` owners, roughly a third
/// of them over their owner's limit.
fn create_expenses(count: u32, employee_count: u32) -> Vec<Expense> {
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
    (1..=count)
        .map(|id| Expense {
            id,
            employee_id: id % employee_count + 1,
            description: format!("Expense {id}, travel"),
            amount: Decimal::new(i64::from(id % 600) * 100 + 99, 2),
            date,
        })
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let employees = create_employees(50);
    let mut group = c.benchmark_group("validate_batch");

    for size in [100u32, 1_000, 10_000] {
        let expenses = create_expenses(size, 50);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &expenses, |b, expenses| {
            b.iter(|| black_box(validate_batch(&employees, expenses)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let employees = create_employees(50);
    let expenses = create_expenses(1_000, 50);
    let mut group = c.benchmark_group("render_1000");
    group.throughput(Throughput::Elements(1_000));

    for format in [ExportFormat::Csv, ExportFormat::Xml, ExportFormat::Json] {
        let exporter = Exporter::for_format(format, JsonDateStyle::default());
        group.bench_function(format.key(), |b| {
            b.iter(|| {
                black_box(
                    exporter
                        .render(&employees, &expenses)
                        .expect("render succeeds"),
                )
            })
        });
    }

    group.finish();
}

fn bench_formula(c: &mut Criterion) {
    let salary = dec("2500");

    c.bench_function("resolve_limit", |b| {
        b.iter(|| black_box(resolve_limit(black_box("AMOUNT <= 12.5% * SALARY"), salary)))
    });
}

criterion_group!(benches, bench_validate, bench_render, bench_formula);
criterion_main!(benches);
