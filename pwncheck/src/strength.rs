/// Local strength estimate for a password, from 0 (trivially guessable) to 4.
///
/// `user_inputs` are context words that should weaken the score when reused
/// in the password, e.g. the pieces of the user's email address. Purely
/// local: this never consults the breach corpus and never touches the
/// network, so it complements [`Checker::evaluate`](crate::Checker::evaluate)
/// rather than feeding into it.
pub fn strength_score(password: &str, user_inputs: &[&str]) -> u8 {
    match zxcvbn::zxcvbn(password, user_inputs) {
        Ok(estimate) => estimate.score(),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_password_scores_low() {
        assert!(strength_score("password", &[]) <= 1);
    }

    #[test]
    fn long_random_password_scores_high() {
        assert_eq!(strength_score("x9$Lq7!vRw2@pZk5#tBn8&dMj3", &[]), 4);
    }

    #[test]
    fn user_inputs_weaken_the_score() {
        let plain = strength_score("flamingo42street", &[]);
        let contextual = strength_score("flamingo42street", &["flamingo42", "street"]);
        assert!(contextual <= plain);
    }

    #[test]
    fn blank_password_scores_zero() {
        assert_eq!(strength_score("", &[]), 0);
    }
}
