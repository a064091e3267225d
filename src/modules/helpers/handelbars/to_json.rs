use crate::modules::helpers::handelbars::format_points::check_param_count;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

/// # to_json helper
/// serializes a template value to json for use in javascript. the chart
/// payloads reach plotly through this.
///
/// ### usage
/// ```handlebars
/// {{toJson worldMap}}
/// ```
#[derive(Clone, Copy)]
pub struct ToJson;

impl HelperDef for ToJson {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let json_param = helper.param(0);

        if json_param.is_none() {
            return Ok(());
        }

        out.write(json_param.unwrap().value().to_string().as_str())?;
        Ok(())
    }
}
