//! Seedable demo data generation
//!
//! Builds a ledger populated with plausible income, expenses, and budgets
//! for demos and tests. Generation is driven by a caller-supplied seed and
//! anchor date, so the same inputs always produce the same ledger.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{BudgetDraft, CategoryCatalog, Money, Month, TransactionDraft, TransactionKind};
use crate::store::Ledger;

/// Build a demo ledger covering the 12 months ending at the anchor date's
/// month
///
/// Each month gets a salary deposit, a freelance deposit, and a handful of
/// random expenses; the anchor month also gets budgets for most expense
/// categories. Deterministic for a given (seed, anchor) pair.
pub fn sample_ledger(seed: u64, anchor: NaiveDate) -> Ledger {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ledger = Ledger::new();

    let anchor_month = Month::from_date(anchor);

    let mut month = anchor_month;
    for _ in 0..12 {
        add_sample_month(&mut ledger, &mut rng, month);
        month = month.prev();
    }

    for category in CategoryCatalog::expense() {
        if rng.random_bool(0.7) {
            let amount = Money::from_f64(rng.random_range(100.0..600.0));
            ledger
                .add_or_update_budget(BudgetDraft::new(*category, amount, anchor_month))
                .expect("generated budget is valid");
        }
    }

    ledger
}

fn add_sample_month(ledger: &mut Ledger, rng: &mut StdRng, month: Month) {
    let day = |d: u32| {
        NaiveDate::from_ymd_opt(month.year, month.month, d).expect("day 1-28 exists in every month")
    };

    let salary = Money::from_f64(rng.random_range(2800.0..3300.0));
    ledger
        .add_transaction(TransactionDraft::new(
            TransactionKind::Income,
            salary,
            day(5),
            "Monthly Salary",
            "Salary",
        ))
        .expect("generated income is valid");

    let freelance = Money::from_f64(rng.random_range(300.0..500.0));
    ledger
        .add_transaction(TransactionDraft::new(
            TransactionKind::Income,
            freelance,
            day(15),
            "Freelance Work",
            "Freelance",
        ))
        .expect("generated income is valid");

    let expense_count = rng.random_range(5..15);
    for _ in 0..expense_count {
        let categories = CategoryCatalog::expense();
        let category = categories[rng.random_range(0..categories.len())];
        let amount = Money::from_f64(rng.random_range(10.0..210.0));
        let description = if category == "Food" {
            "Dinner out".to_string()
        } else {
            format!("{} expense", category)
        };

        ledger
            .add_transaction(TransactionDraft::new(
                TransactionKind::Expense,
                amount,
                day(rng.random_range(1..=28)),
                description,
                category,
            ))
            .expect("generated expense is valid");
    }
}
