//! Content assembly: one interface descriptor in, two text artifacts out.
//!
//! The type-declaration artifact holds the params and response
//! interfaces; the request-function artifact holds an exported async
//! function bound to the interface's method and path. Whole-file
//! renderers compose artifacts into the per-menu `interfaces.ts`,
//! `apis.ts` and `index.ts` contents; persistence belongs to the caller.

use ytt_ir::{GeneratedArtifact, InterfaceDescriptor, ResponseBodyKind};

use crate::{
    CodegenOptions, DerivedNames, comment, derive_names, infer::infer_param_type,
    schema::translate_response_body,
};

/// The two artifacts generated per interface, plus the names binding
/// them together.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub names: DerivedNames,
    /// Params + response interface declarations
    pub interface: GeneratedArtifact,
    /// Request function declaration
    pub api: GeneratedArtifact,
}

/// Assemble both artifacts for one interface. `with_id` forces the
/// id-suffixed naming (see [`derive_names`]).
pub fn assemble(iface: &InterfaceDescriptor, with_id: bool, options: &CodegenOptions) -> Artifacts {
    let names = derive_names(&iface.method, &iface.path, iface.id, with_id, options);
    let interface = GeneratedArtifact::new(
        names.type_base.clone(),
        interface_content(iface, &names, options),
    );
    let api = GeneratedArtifact::new(names.function_name.clone(), api_content(iface, &names, options));
    Artifacts {
        names,
        interface,
        api,
    }
}

/// Assemble a whole menu. Interfaces whose last path segment collides
/// within the batch get the id suffix so their names stay unique;
/// everything else keeps the short name.
pub fn assemble_menu(ifaces: &[InterfaceDescriptor], options: &CodegenOptions) -> Vec<Artifacts> {
    let mut segment_counts: indexmap::IndexMap<String, usize> = indexmap::IndexMap::new();
    for iface in ifaces {
        *segment_counts
            .entry(last_segment(&iface.path).to_string())
            .or_default() += 1;
    }

    ifaces
        .iter()
        .map(|iface| {
            let collides = segment_counts
                .get(last_segment(&iface.path))
                .is_some_and(|n| *n > 1);
            assemble(iface, collides, options)
        })
        .collect()
}

fn last_segment(path: &str) -> &str {
    path.split('/').filter(|s| !s.is_empty()).next_back().unwrap_or("")
}

fn interface_content(
    iface: &InterfaceDescriptor,
    names: &DerivedNames,
    options: &CodegenOptions,
) -> String {
    let title = comment::sanitize_comment(&iface.title);

    let mut content = String::new();
    content.push_str(&comment::block_comment(
        format!("{title} request parameters").trim(),
    ));
    content.push_str(&format!("export interface {} {{\n", names.params_type));
    for param in &iface.req_query {
        let ty = infer_param_type(&param.example, &param.desc);
        let doc = comment::inline_doc(&comment::sanitize_comment(&param.desc));
        if !doc.is_empty() {
            content.push_str(&format!("  {doc}\n"));
        }
        let key = sanitize_property_key(&param.name);
        let optional = if param.is_required() { "" } else { "?" };
        content.push_str(&format!("  {key}{optional}: {ty};\n"));
    }
    content.push_str("}\n\n");

    content.push_str(&comment::block_comment(format!("{title} response").trim()));
    content.push_str(&format!("export interface {} {{\n", names.response_type));
    if !iface.res_body.is_empty() && iface.res_body_kind == ResponseBodyKind::Json {
        content.push_str(&translate_response_body(&iface.res_body, options));
    } else {
        content.push_str("  data?: any;\n");
    }
    content.push_str("}\n");

    content
}

fn api_content(
    iface: &InterfaceDescriptor,
    names: &DerivedNames,
    options: &CodegenOptions,
) -> String {
    let method = if iface.method.trim().is_empty() {
        "GET".to_string()
    } else {
        iface.method.to_uppercase()
    };
    let transport = options.transport_for(&iface.method);
    let config_type = transport_config_type_name(transport);

    let mut content = String::new();
    if options.generate_comments {
        let mut lines = Vec::new();
        let title = comment::sanitize_comment(&iface.title);
        if !title.is_empty() {
            lines.push(title);
        }
        lines.push(format!("Method: {method}"));
        lines.push(format!("Path: {}", iface.path));
        content.push_str(&comment::block_comment(&lines.join("\n")));
    }

    content.push_str(&format!(
        "export const {fn_name} = async (params: {params}, config?: {config_type}) => {{\n  return {transport}<{response}>('{path}', params, config);\n}};",
        fn_name = names.function_name,
        params = names.params_type,
        response = names.response_type,
        path = iface.path,
    ));
    content
}

/// `get` -> `GetConfig`: the name of the `Parameters<typeof fn>[2]` alias
/// generated for a transport function.
pub fn transport_config_type_name(function_name: &str) -> String {
    let mut chars = function_name.chars();
    match chars.next() {
        None => "Config".to_string(),
        Some(first) => format!("{}{}Config", first.to_uppercase(), chars.as_str()),
    }
}

/// Clean a parameter name into a usable property key: trim, un-escape
/// quotes, strip one layer of wrapping quotes, drop internal whitespace,
/// then validate.
pub fn sanitize_property_key(raw: &str) -> String {
    let mut name = raw.trim().replace("\\\"", "\"").replace("\\'", "'");
    if name.len() >= 2
        && ((name.starts_with('"') && name.ends_with('"'))
            || (name.starts_with('\'') && name.ends_with('\'')))
    {
        name = name[1..name.len() - 1].to_string();
    }
    name.retain(|c| !c.is_whitespace());
    if name.is_empty() {
        return "prop".to_string();
    }
    ensure_valid_property_name(&name)
}

/// Make a property name valid TypeScript: a leading digit gets a `prop`
/// prefix, and anything outside `[A-Za-z0-9_]` turns the whole key into
/// a quoted literal.
pub fn ensure_valid_property_name(name: &str) -> String {
    let mut name = name.to_string();
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name = format!("prop{name}");
    }
    if name
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_')
    {
        name = format!("'{name}'");
    }
    name
}

fn file_header(label: &str, menu_name: &str, generated_at: &str) -> String {
    format!(
        "// \"{menu_name}\" {label}\n// Generated at: {generated_at}\n// Do not edit this file by hand; it is rewritten on every run.\n\n"
    )
}

/// Render the full `interfaces.ts` for one menu.
pub fn render_interfaces_file(
    menu_name: &str,
    artifacts: &[Artifacts],
    generated_at: &str,
) -> String {
    let mut content = file_header(
        "auto-generated TypeScript interface definitions",
        menu_name,
        generated_at,
    );
    let blocks: Vec<&str> = artifacts
        .iter()
        .map(|a| a.interface.content.trim_end())
        .collect();
    content.push_str(&blocks.join("\n\n"));
    content.push('\n');
    content
}

/// Render the full `apis.ts` for one menu: transport imports, type
/// imports, one config-type alias per transport, then the request
/// functions.
pub fn render_apis_file(
    menu_name: &str,
    artifacts: &[Artifacts],
    options: &CodegenOptions,
    generated_at: &str,
) -> String {
    let mut content = file_header("auto-generated API request functions", menu_name, generated_at);

    content.push_str(&format!(
        "import {{ {} }} from '{}';\n\n",
        options.transport_fns.join(", "),
        options.request_fn_path
    ));

    let type_imports: Vec<String> = artifacts
        .iter()
        .map(|a| format!("{}, {}", a.names.params_type, a.names.response_type))
        .collect();
    content.push_str(&format!(
        "import {{ {} }} from './interfaces';\n\n",
        type_imports.join(", ")
    ));

    for transport in &options.transport_fns {
        content.push_str(&format!(
            "type {} = Parameters<typeof {}>[2];\n\n",
            transport_config_type_name(transport),
            transport
        ));
    }

    let blocks: Vec<&str> = artifacts.iter().map(|a| a.api.content.trim_end()).collect();
    content.push_str(&blocks.join("\n\n"));
    content.push('\n');
    content
}

/// Render the per-menu `index.ts` re-exporting interfaces and apis.
pub fn render_module_index(menu_name: &str, generated_at: &str) -> String {
    let mut content = file_header("API module exports", menu_name, generated_at);
    content.push_str("export * from './interfaces';\nexport * from './apis';\n");
    content
}
