//! Payroll cycle. Due-time always advances once it is reached, paid or not,
//! so a missed payroll is never retried within the same tick.

use crate::balance::{
    MISSED_PAYROLL_LOYALTY_PENALTY, MISSED_PAYROLL_MORALE_PENALTY, MISSED_PAYROLL_STRESS_PENALTY,
    PAYROLL_INTERVAL_SECONDS, PAYROLL_MORALE_BONUS, PAYROLL_STRESS_RELIEF,
};
use crate::state::{CrewMember, GameState};

pub fn total_payroll(crew: &[CrewMember]) -> i64 {
    crew.iter().map(|member| member.pay_rate).sum()
}

pub fn process_payroll(mut state: GameState) -> GameState {
    if state.time < state.company.payroll_due_time {
        return state;
    }
    let payroll = total_payroll(&state.company.crew);
    state.company.payroll_due_time += PAYROLL_INTERVAL_SECONDS;
    if payroll == 0 {
        return state;
    }

    if state.company.credits >= payroll {
        state.company.credits -= payroll;
        for member in &mut state.company.crew {
            member.needs =
                member.needs.adjust(-PAYROLL_STRESS_RELIEF, 0.0, PAYROLL_MORALE_BONUS, 0.0);
        }
        tracing::info!(payroll, credits = state.company.credits, "payroll paid");
        state.push_log(format!("Payroll of {payroll} cr paid."));
    } else {
        for member in &mut state.company.crew {
            member.needs = member.needs.adjust(
                MISSED_PAYROLL_STRESS_PENALTY,
                0.0,
                -MISSED_PAYROLL_MORALE_PENALTY,
                -MISSED_PAYROLL_LOYALTY_PENALTY,
            );
        }
        tracing::info!(payroll, credits = state.company.credits, "payroll missed");
        state.push_log(format!("Missed payroll of {payroll} cr. The crew noticed."));
    }
    state
}
