//! Fewest coins to reach an amount, bottom-up over a 1-D table. `dp[a]` is the
//! minimum number of coins summing to `a`, null while unreachable.

use serde::Deserialize;
use stepviz_core::{Action, ArrayView, Recorder, Ref, Scalar, Step, Trace};

use crate::error::InputError;

#[derive(Debug, Clone, Deserialize)]
pub struct CoinChangeInput {
    pub coins: Vec<i64>,
    pub amount: i64,
}

fn table(dp: &[Option<i64>]) -> ArrayView {
    ArrayView::new(dp.iter().map(|&v| Scalar::from(v)).collect())
}

pub fn run(input: &CoinChangeInput) -> Result<Trace, InputError> {
    if input.amount < 0 {
        return Err(InputError::NegativeAmount(input.amount));
    }
    for &c in &input.coins {
        if c <= 0 {
            return Err(InputError::NonPositive(c));
        }
    }

    let amount = input.amount as usize;
    let mut coins = input.coins.clone();
    coins.sort_unstable();
    coins.dedup();

    let mut dp: Vec<Option<i64>> = vec![None; amount + 1];
    dp[0] = Some(0);

    let mut rec = Recorder::new();
    rec.push(
        Step::new(
            table(&dp),
            format!(
                "amount 0 needs 0 coins; fill the table up to {} using coins {coins:?}",
                input.amount
            ),
        )
        .action(Action::Visit)
        .highlight(Ref::Index(0)),
    );

    for a in 1..=amount {
        for &c in &coins {
            let c_usize = c as usize;
            if c_usize > a {
                break;
            }
            let Some(without) = dp[a - c_usize] else {
                continue;
            };
            let candidate = without + 1;
            let improved = match dp[a] {
                Some(current) => candidate < current,
                None => true,
            };
            if improved {
                dp[a] = Some(candidate);
                rec.push(
                    Step::new(
                        table(&dp),
                        format!("amount {a}: coin {c} on top of amount {} gives {candidate} coins", a - c_usize),
                    )
                    .action(Action::Insert)
                    .highlight(Ref::Index(a))
                    .secondary(Ref::Index(a - c_usize)),
                );
            }
        }
        if dp[a].is_none() {
            rec.push(
                Step::new(table(&dp), format!("amount {a} cannot be formed from these coins"))
                    .action(Action::Compare)
                    .highlight(Ref::Index(a)),
            );
        }
    }

    let result = dp[amount].unwrap_or(-1);
    let message = match dp[amount] {
        Some(k) => format!("amount {} needs {k} coins", input.amount),
        None => format!("amount {} is unreachable", input.amount),
    };
    Ok(rec.finish(
        Step::new(table(&dp), message).highlight(Ref::Index(amount)),
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stepviz_core::ResultValue;

    #[rstest]
    #[case(vec![1, 2, 5], 11, 3)]
    #[case(vec![2], 3, -1)]
    #[case(vec![1], 0, 0)]
    #[case(vec![2, 5], 9, 3)]
    #[case(vec![5, 2, 1, 1], 11, 3)]
    fn test_minimum_coin_counts(#[case] coins: Vec<i64>, #[case] amount: i64, #[case] expected: i64) {
        let trace = run(&CoinChangeInput { coins, amount }).unwrap();
        assert_eq!(trace.result(), Some(&ResultValue::Int(expected)));
        trace.check_invariants().unwrap();
    }

    #[rstest]
    #[case(vec![0, 1], 4)]
    #[case(vec![-2], 4)]
    #[case(vec![1], -1)]
    fn test_bad_inputs_are_rejected(#[case] coins: Vec<i64>, #[case] amount: i64) {
        assert!(run(&CoinChangeInput { coins, amount }).is_err());
    }
}
