//! Object management commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use rampart::{GroupParams, HostParams, NetworkParams, Protocol, ServiceParams};

use crate::cli::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ObjectCommand {
    #[command(subcommand)]
    pub command: ObjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectSubcommand {
    /// Create a host object
    AddHost(AddHostArgs),

    /// Create a network object
    AddNetwork(AddNetworkArgs),

    /// Create a group object
    AddGroup(AddGroupArgs),

    /// Create a TCP or UDP service object
    AddService(AddServiceArgs),

    /// Delete any object by UID
    Delete(DeleteArgs),

    /// List objects
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct AddHostArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// IPv4 address
    #[arg(long)]
    pub ip: String,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddNetworkArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// Subnet address (e.g. 192.168.0.0)
    #[arg(long)]
    pub subnet: String,

    /// Mask length (0-32)
    #[arg(long)]
    pub mask_length: u8,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddGroupArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// Comma-separated member object names
    #[arg(long, value_delimiter = ',')]
    pub members: Vec<String>,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddServiceArgs {
    /// Object name
    #[arg(long)]
    pub name: String,

    /// Port number
    #[arg(long)]
    pub port: u16,

    /// Protocol: tcp or udp
    #[arg(long)]
    pub protocol: String,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Object UID
    #[arg(long)]
    pub uid: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by object type (e.g. host, network, group)
    #[arg(long)]
    pub r#type: Option<String>,

    /// Maximum number of objects to return
    #[arg(long, default_value_t = 500)]
    pub limit: u32,
}

pub async fn handle(connect: &ConnectArgs, cmd: ObjectCommand) -> Result<()> {
    let client = connect.client()?;

    let response = match cmd.command {
        ObjectSubcommand::AddHost(args) => {
            let mut host = HostParams::new(&args.name, &args.ip)?;
            if let Some(comments) = args.comments {
                host = host.with_comments(comments);
            }
            client.create_host(&host).await
        }
        ObjectSubcommand::AddNetwork(args) => {
            let mut network = NetworkParams::new(&args.name, &args.subnet, args.mask_length)?;
            if let Some(comments) = args.comments {
                network = network.with_comments(comments);
            }
            client.create_network(&network).await
        }
        ObjectSubcommand::AddGroup(args) => {
            let mut group = GroupParams::new(&args.name, args.members)?;
            if let Some(comments) = args.comments {
                group = group.with_comments(comments);
            }
            client.create_group(&group).await
        }
        ObjectSubcommand::AddService(args) => {
            let protocol: Protocol = args.protocol.parse()?;
            let mut service = ServiceParams::new(&args.name, args.port, protocol)?;
            if let Some(comments) = args.comments {
                service = service.with_comments(comments);
            }
            client.create_service(&service).await
        }
        ObjectSubcommand::Delete(args) => client.delete_object(&args.uid).await,
        ObjectSubcommand::List(args) => {
            client.show_objects(args.r#type.as_deref(), args.limit).await
        }
    };

    client.logout().await;
    output::render(response)
}
