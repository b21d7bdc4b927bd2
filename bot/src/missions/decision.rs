use std::io::Write;

use crate::{
    algorithms::decision::{Decision, Minimax},
    render::Canvas,
};

pub struct DecisionMission {
    minimax: Minimax,
}

impl DecisionMission {
    pub fn new(minimax: Minimax) -> Self {
        Self { minimax }
    }

    pub fn run<W: Write>(&self, canvas: &mut Canvas<W>) -> eyre::Result<Decision> {
        log::info!(
            "weighing attack (risk {}) against report (risk {}) at depth {}",
            self.minimax.risks.attack,
            self.minimax.risks.report,
            self.minimax.depth
        );

        let decision = self.minimax.decide();
        log::debug!("minimax score: {}", decision.score);

        canvas.set_status(decision.to_string())?;
        canvas.commit()?;

        log::info!("{}", decision);
        Ok(decision)
    }
}
