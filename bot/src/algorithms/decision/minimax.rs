use std::fmt;

/// cost of each response once the intruder has been located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Risks {
    pub attack: i32,
    pub report: i32,
}

impl Default for Risks {
    fn default() -> Self {
        Self {
            attack: 30,
            report: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Bot,
    Intruder,
}

impl Turn {
    pub fn next(self) -> Self {
        match self {
            Self::Bot => Self::Intruder,
            Self::Intruder => Self::Bot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attack,
    Report,
}

impl Action {
    pub const ALL: [Self; 2] = [Self::Attack, Self::Report];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack => "ATTACK!",
            Self::Report => "REPORT!",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub score: i32,
    pub action: Action,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decision: Bot chooses to {}", self.action)
    }
}

/// both actions are always expanded, so the tree has 2^depth leaves
pub const MAX_DEPTH: u32 = 16;

/// fixed-depth minimax over the attack/report choice.
///
/// Both actions lead to the same subtree and a leaf is scored only by whose
/// turn it is: the bot pays the attack risk, the intruder side the report
/// risk. The result therefore depends on the parity of `depth`.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    pub depth: u32,
    pub risks: Risks,
}

impl Default for Minimax {
    fn default() -> Self {
        Self {
            depth: 2,
            risks: Risks::default(),
        }
    }
}

impl Minimax {
    pub fn new(depth: u32, risks: Risks) -> Self {
        Self { depth, risks }
    }

    pub fn evaluate(&self, depth: u32, turn: Turn) -> i32 {
        if depth == 0 {
            return match turn {
                Turn::Bot => self.risks.attack.saturating_neg(),
                Turn::Intruder => self.risks.report.saturating_neg(),
            };
        }

        let scores = Action::ALL.map(|action| {
            let score = self.evaluate(depth - 1, turn.next());
            log::trace!("depth {depth} {turn:?} {action:?}: {score}");
            score
        });

        match turn {
            Turn::Bot => scores.into_iter().max(),
            Turn::Intruder => scores.into_iter().min(),
        }
        .unwrap_or_default()
    }

    pub fn decide(&self) -> Decision {
        let score = self.evaluate(self.depth, Turn::Bot);
        let action = if score == self.risks.attack.saturating_neg() {
            Action::Attack
        } else {
            Action::Report
        };
        Decision { score, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_attacks() {
        let decision = Minimax::default().decide();
        assert_eq!(decision.score, -30);
        assert_eq!(decision.action, Action::Attack);
        assert_eq!(decision.to_string(), "Decision: Bot chooses to ATTACK!");
    }

    #[test]
    fn leaves_score_by_turn() {
        let minimax = Minimax::default();
        assert_eq!(minimax.evaluate(0, Turn::Bot), -30);
        assert_eq!(minimax.evaluate(0, Turn::Intruder), -10);
    }

    #[test]
    fn odd_depth_reports() {
        let decision = Minimax::new(1, Risks::default()).decide();
        assert_eq!(decision.score, -10);
        assert_eq!(decision.action, Action::Report);

        let decision = Minimax::new(3, Risks::default()).decide();
        assert_eq!(decision.action, Action::Report);
    }

    #[test]
    fn depth_zero_attacks_immediately() {
        assert_eq!(Minimax::new(0, Risks::default()).decide().action, Action::Attack);
    }

    #[test]
    fn equal_risks_always_attack() {
        let risks = Risks {
            attack: 20,
            report: 20,
        };
        for depth in 0..4 {
            assert_eq!(Minimax::new(depth, risks).decide().action, Action::Attack);
        }
    }

    #[test]
    fn extreme_risks_do_not_overflow() {
        let risks = Risks {
            attack: i32::MIN,
            report: 10,
        };
        let decision = Minimax::new(2, risks).decide();
        assert_eq!(decision.score, i32::MAX);
        assert_eq!(decision.action, Action::Attack);
    }

    #[test]
    fn deepest_search_still_decides() {
        let decision = Minimax::new(MAX_DEPTH, Risks::default()).decide();
        assert_eq!(decision.action, Action::Attack);
    }

    #[test]
    fn custom_risks_flow_through() {
        let risks = Risks {
            attack: 5,
            report: 50,
        };
        let decision = Minimax::new(2, risks).decide();
        assert_eq!(decision.score, -5);
        assert_eq!(decision.action, Action::Attack);
    }
}
