//! Explain command report data structures.

use super::output::{Output, Report};

/// Report data explaining a round.
#[derive(Debug)]
pub struct ExplainReport {
    pub graph_info: GraphInfo,
    pub phases: Vec<PhaseInfo>,
    pub targets: Vec<TargetInfo>,
    /// Declarations left for a later round.
    pub deferred: Vec<String>,
    pub violations: Vec<String>,
}

/// Graph file information.
#[derive(Debug)]
pub struct GraphInfo {
    pub path: String,
    pub class_count: usize,
    pub language: String,
    pub validation: String,
    pub runtime_package: String,
}

/// Pipeline phase information.
#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

/// One resolved injection target.
#[derive(Debug)]
pub struct TargetInfo {
    pub owner: String,
    pub factory: String,
    pub params: Vec<ParamInfo>,
    pub scope: Option<String>,
    /// Lifecycle flags that are set.
    pub flags: Vec<&'static str>,
    pub member_injector: Option<String>,
}

#[derive(Debug)]
pub struct ParamInfo {
    pub name: String,
    pub kind: &'static str,
    pub declared_type: String,
    /// Type looked up in the scope.
    pub resolved_type: String,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Pick Round Explanation");
        out.newline();

        let info = &self.graph_info;
        out.key_value("Input", &info.path);
        out.key_value_indented("Classes", &info.class_count.to_string());
        out.key_value_indented("Language", &info.language);
        out.key_value_indented("Validation", &info.validation);
        out.key_value_indented("Runtime package", &info.runtime_package);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section(&format!("Injection Targets ({})", self.targets.len()));
        for target in &self.targets {
            render_target(out, target);
        }

        if !self.deferred.is_empty() {
            out.newline();
            out.section("Deferred");
            for decl in &self.deferred {
                out.list_item(decl);
            }
        }

        if !self.violations.is_empty() {
            out.newline();
            for violation in &self.violations {
                out.error(violation);
            }
        }
    }
}

fn render_target(out: &mut dyn Output, target: &TargetInfo) {
    out.list_item(&format!("{} -> {}", target.owner, target.factory));
    for param in &target.params {
        let ty = if param.declared_type == param.resolved_type {
            param.declared_type.clone()
        } else {
            format!("{} ({})", param.declared_type, param.resolved_type)
        };
        out.key_value_indented(&format!("  {} [{}]", param.name, param.kind), &ty);
    }
    if let Some(scope) = &target.scope {
        out.key_value_indented("  scope", scope);
    }
    if !target.flags.is_empty() {
        out.key_value_indented("  flags", &target.flags.join(", "));
    }
    if let Some(injector) = &target.member_injector {
        out.key_value_indented("  members", injector);
    }
}
