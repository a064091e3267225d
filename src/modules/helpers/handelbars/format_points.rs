use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

/// # points formatting helper
/// a formatter to display championship points without a spurious trailing
/// fraction: whole totals render as integers, half points keep one decimal.
///
/// ### usage
/// ```handlebars
/// {{formatPoints 413.0}}
/// {{formatPoints 18.5}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatPoints;

impl HelperDef for FormatPoints {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let points_param = helper.param(0);

        let points: f64 =
            serde_json::from_value(points_param.unwrap().value().clone()).unwrap();
        if points.fract() == 0.0 {
            out.write(&format!("{}", points as i64))?;
        } else {
            out.write(&format!("{points}"))?;
        }

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new::<String>(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}
