use super::super::RuleOutcome;

const SUSPICIOUS_RATIO: f64 = 0.3;
const BARGAIN_RATIO: f64 = 0.5;
const BARGAIN_WEIGHT_FACTOR: f64 = 0.6;

const SYMBOLIC_PRICE: f64 = 1.0;
const SYMBOLIC_PRICE_SCORE: i32 = 25;
const ROUND_PRICE_FLOOR: f64 = 500.0;
const ROUND_PRICE_STEP: f64 = 100.0;
const ROUND_PRICE_SCORE: i32 = 5;

/// Market floor for a frequently counterfeited product.
pub(crate) struct PriceBenchmark {
    pub(crate) keyword: &'static str,
    pub(crate) minimum_expected: f64,
    pub(crate) weight: i32,
}

pub(crate) const PRICE_BENCHMARKS: &[PriceBenchmark] = &[
    PriceBenchmark {
        keyword: "iphone",
        minimum_expected: 300.0,
        weight: 30,
    },
    PriceBenchmark {
        keyword: "macbook",
        minimum_expected: 600.0,
        weight: 30,
    },
    PriceBenchmark {
        keyword: "playstation 5",
        minimum_expected: 350.0,
        weight: 30,
    },
    PriceBenchmark {
        keyword: "ps5",
        minimum_expected: 350.0,
        weight: 30,
    },
    PriceBenchmark {
        keyword: "samsung s23",
        minimum_expected: 400.0,
        weight: 25,
    },
    PriceBenchmark {
        keyword: "rolex",
        minimum_expected: 2000.0,
        weight: 40,
    },
    PriceBenchmark {
        keyword: "louis vuitton",
        minimum_expected: 500.0,
        weight: 35,
    },
];

pub(crate) fn evaluate(price: f64, title: &str) -> RuleOutcome {
    let title = title.to_lowercase();

    for benchmark in PRICE_BENCHMARKS {
        if !title.contains(benchmark.keyword) {
            continue;
        }

        if price < benchmark.minimum_expected * SUSPICIOUS_RATIO {
            return RuleOutcome::flag(
                benchmark.weight,
                format!(
                    "price suspiciously low for {} (€{})",
                    benchmark.keyword, price
                ),
            );
        }

        if price < benchmark.minimum_expected * BARGAIN_RATIO {
            let contribution = (f64::from(benchmark.weight) * BARGAIN_WEIGHT_FACTOR).round() as i32;
            return RuleOutcome::flag(
                contribution,
                format!(
                    "very good price for {}, verify authenticity",
                    benchmark.keyword
                ),
            );
        }
    }

    if price == SYMBOLIC_PRICE {
        return RuleOutcome::flag(
            SYMBOLIC_PRICE_SCORE,
            "symbolic price (€1), contact seller for real price",
        );
    }

    if price >= ROUND_PRICE_FLOOR && price % ROUND_PRICE_STEP == 0.0 {
        return RuleOutcome::flag(ROUND_PRICE_SCORE, "very round price for an expensive item");
    }

    RuleOutcome::none()
}
