//! `func list` — show functions deployed to the cluster.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ConnectionConfigProvider;
use crate::domain::{DEFAULT_NAMESPACE, ServiceSummary, TriggerSummary};
use crate::infra::knative::PlatformClientFactory;
use crate::infra::kubeconfig::KubeconfigProvider;
use crate::output::json::{Listing, format_error, format_listing};
use crate::output::progress::spinner;

/// Arguments for the `func list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Namespace to list (defaults to the kubeconfig context namespace)
    #[arg(short, long, env = "FUNC_NAMESPACE")]
    pub namespace: Option<String>,

    /// Also list eventing triggers
    #[arg(long)]
    pub triggers: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the cluster cannot be reached or a response cannot
/// be decoded. With `--json`, failures are printed as a JSON error object.
pub async fn run(app: &AppContext, args: &ListArgs) -> Result<ExitCode> {
    let provider = KubeconfigProvider::default();
    let namespace = resolve_namespace(args.namespace.as_deref(), &provider);

    let pb = spinner(&app.output, &format!("Listing functions in {namespace}"));
    let factory = PlatformClientFactory::new(provider);
    let result = fetch(&factory, &namespace, args.triggers).await;
    pb.finish_and_clear();

    match result {
        Ok((functions, triggers)) => {
            if args.json {
                println!(
                    "{}",
                    format_listing(&Listing {
                        namespace: &namespace,
                        functions: &functions,
                        triggers: triggers.as_deref(),
                    })?
                );
            } else {
                let renderer = app.renderer();
                renderer.render_functions(&namespace, &functions);
                if let Some(triggers) = &triggers {
                    renderer.render_triggers(&namespace, triggers);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if args.json => {
            println!("{}", format_error(&format!("{e:#}"))?);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

/// Explicit namespace, else the kubeconfig context namespace, else `default`.
#[must_use]
pub fn resolve_namespace(explicit: Option<&str>, provider: &impl ConnectionConfigProvider) -> String {
    if let Some(ns) = explicit.filter(|ns| !ns.is_empty()) {
        return ns.to_string();
    }
    provider
        .load()
        .ok()
        .and_then(|t| t.namespace)
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}

async fn fetch<P: ConnectionConfigProvider>(
    factory: &PlatformClientFactory<P>,
    namespace: &str,
    with_triggers: bool,
) -> Result<(Vec<ServiceSummary>, Option<Vec<TriggerSummary>>)> {
    let functions = factory.new_serving_handle(namespace)?.list_services().await?;
    let triggers = if with_triggers {
        Some(factory.new_eventing_handle(namespace)?.list_triggers().await?)
    } else {
        None
    };
    Ok((functions, triggers))
}
