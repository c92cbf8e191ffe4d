//! Source fragments derived from resolved resources.
//!
//! Templates consume these lists verbatim; keeping them separate from
//! resolution means the templates never need to know the precedence rules.

use serde::Serialize;

use super::identity::ResolvedIdentity;

/// Resync period passed to every informer.
pub const RESYNC_PERIOD: &str = "30*time.Second";

/// Ordered fragment lists for one controller, one entry per resource in
/// declaration order (two for `struct_field_inits`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragments {
    pub lister_fields: Vec<String>,
    pub has_synced_fields: Vec<String>,
    pub struct_field_inits: Vec<String>,
    pub client_inits: Vec<String>,
    pub informer_inits: Vec<String>,
    pub informer_runs: Vec<String>,
    pub new_controller_args: Vec<String>,
}

impl Fragments {
    pub fn synthesize(resources: &[ResolvedIdentity], namespace: &str) -> Self {
        let mut fragments = Fragments {
            lister_fields: Vec::with_capacity(resources.len()),
            has_synced_fields: Vec::with_capacity(resources.len()),
            struct_field_inits: Vec::with_capacity(2 * resources.len()),
            client_inits: Vec::with_capacity(resources.len()),
            informer_inits: Vec::with_capacity(resources.len()),
            informer_runs: Vec::with_capacity(resources.len()),
            new_controller_args: Vec::with_capacity(resources.len()),
        };

        for resource in resources {
            let k = resource.lower_kind.as_str();
            let t = resource.qualified_type_name.as_str();

            if !namespace.is_empty() && resource.is_namespaced {
                let ns = go_string_literal(namespace);
                let informer =
                    format!("kool.NewNamespacedInformer[{t}]({k}Client, {ns}, {RESYNC_PERIOD})");
                fragments.lister_fields.push(format!("{k}Lister kool.NamespacedLister[{t}]"));
                fragments.informer_inits.push(format!("{k}Informer := {informer}"));
                fragments
                    .new_controller_args
                    .push(format!("{k}Informer kool.NamespacedInformer[{t}],"));
            } else {
                fragments.lister_fields.push(format!("{k}Lister kool.Lister[{t}]"));
                let informer = format!("kool.NewInformer[{t}]({k}Client, {RESYNC_PERIOD})");
                fragments.informer_inits.push(format!("{k}Informer := {informer}"));
                fragments.new_controller_args.push(format!("{k}Informer kool.Informer[{t}],"));
            }

            fragments.has_synced_fields.push(format!("{k}Synced cache.InformerSynced"));
            fragments.struct_field_inits.push(format!("c.{k}Lister = {k}Informer.Lister()"));
            fragments
                .struct_field_inits
                .push(format!("c.{k}Synced = {k}Informer.Informer().HasSynced"));
            fragments.client_inits.push(format!("{k}Client := kool.NewClient[{t}](config)"));
            fragments.informer_runs.push(format!("go {k}Informer.Informer().Run(ctx.Done())"));
        }

        fragments
    }
}

/// Quote `value` as an interpreted Go string literal.
fn go_string_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
