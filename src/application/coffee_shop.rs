use crate::{
    BeverageId, CafeConfig, CafeError, Session, ShopStyle,
    application::RegistrySlot,
    factories,
    repositories::IdentifierLog,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, info_span};

pub const PROMPT: &str =
    "Enter 1 for the Italian-style coffee shop or 2 for the American-style coffee shop:";

/// Outcome of one run of the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub session: Session,
    pub identifiers: Vec<BeverageId>,
}

impl SessionReport {
    pub fn style(&self) -> ShopStyle {
        self.session.style()
    }
}

/// Entry point that wires the factory, registry and identifier log together.
///
/// A run asks for a shop style, brews and serves `SERVINGS` beverages from
/// the chosen shop, then prints every recorded identifier.
#[derive(Debug, Clone, Default)]
pub struct CoffeeShop {
    config: CafeConfig,
}

impl CoffeeShop {
    pub const SERVINGS: usize = 2;

    pub fn new(config: CafeConfig) -> Self {
        Self { config }
    }

    /// Prompts on `output`, reads the style selection from `input`, then serves.
    ///
    /// End of input counts as a non-Italian selection.
    pub fn run<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionReport, CafeError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut selection = String::new();
        input.read_line(&mut selection)?;
        let style = ShopStyle::from_selection(&selection);
        debug!(selection = selection.trim(), %style, "read shop selection");

        self.serve_session(style, output)
    }

    /// Serves a full session for an already chosen style.
    pub fn serve_session<W: Write>(
        &self,
        style: ShopStyle,
        output: &mut W,
    ) -> Result<SessionReport, CafeError> {
        let session = Session::open(style);
        let span = info_span!("session", id = %session.id(), %style);
        let _guard = span.enter();

        let mut slot = RegistrySlot::new();
        let registry = slot.get_instance(factories::factory_for(style, &self.config.generator));
        let mut log = IdentifierLog::new();

        for _ in 0..Self::SERVINGS {
            let beverage = registry.create_beverage();
            log.record(&beverage);
            beverage.serve(output)?;
        }

        log.print_all(output)?;
        output.flush()?;
        info!(
            served = log.len(),
            started_at = %session.started_at(),
            "session finished"
        );

        Ok(SessionReport {
            session,
            identifiers: log.entries().to_vec(),
        })
    }
}
