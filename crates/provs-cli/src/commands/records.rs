//! Generic record commands: list, show, create, update, delete.

use std::io::{self, IsTerminal, Read};

use provs_core::model::{Coffee, Order, SecretManager, WriteOnly};
use provs_core::{Client, ResourceType, StoreError};

use crate::app::AppContext;
use crate::cli::{CreateArgs, UpdateArgs};
use crate::errors::CliError;
use crate::output::{records_table, to_pretty_json, Record};

/// Call a generic handler with the entity type stored under a resource type.
macro_rules! with_record_type {
    ($resource_type:expr, $handler:ident($($arg:expr),* $(,)?)) => {
        match $resource_type {
            ResourceType::Coffees => $handler::<Coffee>($($arg),*),
            ResourceType::Order => $handler::<Order>($($arg),*),
            ResourceType::SecretManager => $handler::<SecretManager>($($arg),*),
            ResourceType::Secret | ResourceType::WriteOnly => $handler::<WriteOnly>($($arg),*),
        }
    };
}

fn client<T: Record>(ctx: &AppContext, resource_type: ResourceType) -> Client<T> {
    Client::new(ctx.backend.clone(), resource_type)
}

/// Record JSON from `--data`, or stdin when it is not a terminal.
fn read_body(data: Option<&str>) -> anyhow::Result<String> {
    if let Some(data) = data {
        return Ok(data.to_string());
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(
            CliError::invalid_input("No record data: pass --data or pipe JSON on stdin").into(),
        );
    }
    let mut body = String::new();
    stdin.lock().read_to_string(&mut body)?;
    Ok(body)
}

fn parse_record<T: Record>(resource_type: ResourceType, body: &str) -> anyhow::Result<T> {
    serde_json::from_str(body).map_err(|e| {
        CliError::invalid_input(format!("Invalid {} JSON: {}", resource_type, e)).into()
    })
}

pub fn handle_list(ctx: &AppContext, resource_type: ResourceType, json: bool) -> anyhow::Result<()> {
    with_record_type!(resource_type, list_records(ctx, resource_type, json))
}

fn list_records<T: Record>(
    ctx: &AppContext,
    resource_type: ResourceType,
    json: bool,
) -> anyhow::Result<()> {
    let records = match client::<T>(ctx, resource_type).get_all() {
        Ok(records) => records,
        Err(StoreError::NamespaceNotFound { .. }) => Vec::new(),
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", to_pretty_json(&records)?);
    } else if ctx.quiet {
        for record in &records {
            println!("{}", record.id());
        }
    } else if records.is_empty() {
        println!("No {} records.", resource_type);
    } else {
        println!("{}", records_table(&records));
    }
    Ok(())
}

pub fn handle_show(ctx: &AppContext, resource_type: ResourceType, id: &str) -> anyhow::Result<()> {
    with_record_type!(resource_type, show_record(ctx, resource_type, id))
}

fn show_record<T: Record>(
    ctx: &AppContext,
    resource_type: ResourceType,
    id: &str,
) -> anyhow::Result<()> {
    let record = client::<T>(ctx, resource_type).get_by_id(id)?;
    println!("{}", to_pretty_json(&record)?);
    Ok(())
}

pub fn handle_create(ctx: &AppContext, args: &CreateArgs) -> anyhow::Result<()> {
    let body = read_body(args.data.as_deref())?;
    with_record_type!(
        args.resource_type,
        create_record(ctx, args.resource_type, args.id.as_deref(), &body)
    )
}

fn create_record<T: Record>(
    ctx: &AppContext,
    resource_type: ResourceType,
    id: Option<&str>,
    body: &str,
) -> anyhow::Result<()> {
    let mut record: T = parse_record(resource_type, body)?;
    if let Some(id) = id {
        record.set_id(id.to_string());
    }
    let id = client::<T>(ctx, resource_type).create(&mut record)?;
    if ctx.quiet {
        println!("{}", id);
    } else {
        println!("Created {} {}", resource_type, id);
    }
    Ok(())
}

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let body = read_body(args.data.as_deref())?;
    with_record_type!(
        args.resource_type,
        update_record(ctx, args.resource_type, &args.id, &body)
    )
}

fn update_record<T: Record>(
    ctx: &AppContext,
    resource_type: ResourceType,
    id: &str,
    body: &str,
) -> anyhow::Result<()> {
    let mut record: T = parse_record(resource_type, body)?;
    record.set_id(id.to_string());
    client::<T>(ctx, resource_type).update(&record)?;
    if !ctx.quiet {
        println!("Updated {} {}", resource_type, id);
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, resource_type: ResourceType, id: &str) -> anyhow::Result<()> {
    with_record_type!(resource_type, delete_record(ctx, resource_type, id))
}

fn delete_record<T: Record>(
    ctx: &AppContext,
    resource_type: ResourceType,
    id: &str,
) -> anyhow::Result<()> {
    client::<T>(ctx, resource_type).delete(id)?;
    if !ctx.quiet {
        println!("Deleted {} {}", resource_type, id);
    }
    Ok(())
}
