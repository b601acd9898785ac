//! Access rule commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use rampart::{AccessRuleParams, RuleAction, TrackType};

use crate::cli::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct RuleCommand {
    #[command(subcommand)]
    pub command: RuleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RuleSubcommand {
    /// Create an access rule
    Add(AddRuleArgs),

    /// Modify an existing access rule
    Set(SetRuleArgs),

    /// Delete an access rule by UID
    Delete(DeleteRuleArgs),

    /// Show the access rulebase for a layer
    Show(ShowRulebaseArgs),
}

#[derive(Args, Debug)]
pub struct RuleFields {
    /// Rule name
    #[arg(long)]
    pub name: String,

    /// Access layer the rule belongs to
    #[arg(long, default_value = "Network")]
    pub layer: String,

    /// Comma-separated source objects
    #[arg(long, value_delimiter = ',', default_value = "Any")]
    pub source: Vec<String>,

    /// Comma-separated destination objects
    #[arg(long, value_delimiter = ',', default_value = "Any")]
    pub destination: Vec<String>,

    /// Comma-separated service objects
    #[arg(long, value_delimiter = ',', default_value = "Any")]
    pub service: Vec<String>,

    /// Rule action: accept, drop, reject, inspect or apply-layer
    #[arg(long, default_value = "drop")]
    pub action: String,

    /// Track type: none, log, alert, mail, snmp, user-alert or popup
    #[arg(long, default_value = "log")]
    pub track: String,

    /// Position in the rulebase (1-based)
    #[arg(long)]
    pub position: Option<u32>,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

impl RuleFields {
    fn to_params(&self) -> Result<AccessRuleParams> {
        let action: RuleAction = self.action.parse()?;
        let track: TrackType = self.track.parse()?;

        let mut rule = AccessRuleParams::new(
            &self.name,
            &self.layer,
            self.source.clone(),
            self.destination.clone(),
            self.service.clone(),
            action,
            track,
        )?;
        if let Some(position) = self.position {
            rule = rule.with_position(position);
        }
        if let Some(comments) = &self.comments {
            rule = rule.with_comments(comments);
        }
        Ok(rule)
    }
}

#[derive(Args, Debug)]
pub struct AddRuleArgs {
    #[command(flatten)]
    pub fields: RuleFields,
}

#[derive(Args, Debug)]
pub struct SetRuleArgs {
    /// Rule UID
    #[arg(long)]
    pub uid: String,

    #[command(flatten)]
    pub fields: RuleFields,
}

#[derive(Args, Debug)]
pub struct DeleteRuleArgs {
    /// Rule UID
    #[arg(long)]
    pub uid: String,
}

#[derive(Args, Debug)]
pub struct ShowRulebaseArgs {
    /// Access layer name
    #[arg(long, default_value = "Network")]
    pub layer: String,

    /// Maximum number of rules to return
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

pub async fn handle(connect: &ConnectArgs, cmd: RuleCommand) -> Result<()> {
    let client = connect.client()?;

    let response = match cmd.command {
        RuleSubcommand::Add(args) => {
            let rule = args.fields.to_params()?;
            client.create_access_rule(&rule).await
        }
        RuleSubcommand::Set(args) => {
            let rule = args.fields.to_params()?;
            client.modify_access_rule(&args.uid, &rule).await
        }
        RuleSubcommand::Delete(args) => client.delete_access_rule(&args.uid).await,
        RuleSubcommand::Show(args) => {
            client.show_access_rulebase(&args.layer, args.limit).await
        }
    };

    client.logout().await;
    output::render(response)
}
