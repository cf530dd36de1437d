use anyhow::{Context, bail};
use urlencoding::{decode, encode};

/// Navigation targets within the client.
///
/// Routes render to and parse from the same path shapes the original web
/// client used, so a deep link on the command line looks exactly like the
/// in-app navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing screen hosting the verification entry point.
    Home,
    /// Final questions view for a verified (code, netid) pair.
    FinalQuestions { code: String, netid: String },
}

impl Route {
    /// Render the route as a path. The final questions route follows the
    /// `/fq/{code}/{netid}` template, code segment first. Segments are
    /// percent-encoded; the stored values themselves are never modified.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::FinalQuestions { code, netid } => {
                format!("/fq/{}/{}", encode(code), encode(netid))
            }
        }
    }

    /// Parse a path back into a route.
    ///
    /// Accepts exactly what [`Route::to_path`] produces: absolute paths,
    /// with empty segments allowed (`/fq//` is a legal navigation to empty
    /// credentials, since the gate applies no validation).
    pub fn parse(path: &str) -> anyhow::Result<Route> {
        let Some(rest) = path.strip_prefix('/') else {
            bail!("route must be an absolute path, got {path:?}");
        };
        if rest.is_empty() {
            return Ok(Route::Home);
        }
        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            ["fq", code, netid] => Ok(Route::FinalQuestions {
                code: decode(code)
                    .with_context(|| format!("Failed to decode code segment {code:?}"))?
                    .into_owned(),
                netid: decode(netid)
                    .with_context(|| format!("Failed to decode netid segment {netid:?}"))?
                    .into_owned(),
            }),
            _ => bail!("no route matches {path:?}"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path())
    }
}
