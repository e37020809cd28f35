use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// A template compiled into the binary. The fields of the implementing type
/// are the template variables.
///
/// Templates whose name ends in `.html` have every substituted value
/// HTML-escaped.
pub trait Template: Serialize {
    const NAME: &'static str;
    const SOURCE: &'static str;
}

/// Layouts other templates extend. They are never rendered on their own.
pub const LAYOUTS: &[(&str, &str)] = &[("base.html", include_str!("../templates/base.html"))];

macro_rules! templates {
    ($(
        $(#[doc = $doc:literal])*
        $file:literal => $ident:ident { $( $field:ident ),* $(,)? }
    )*) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
            pub struct $ident {
                $( pub $field: String, )*
            }

            impl Template for $ident {
                const NAME: &'static str = $file;
                const SOURCE: &'static str = include_str!(concat!("../templates/", $file));
            }
        )*

        /// Every renderable template as `(name, source)`.
        pub const TEMPLATES: &[(&str, &str)] = &[$( ($ident::NAME, $ident::SOURCE) ),*];
    };
}

templates! {
    /// Body of the email forwarded to the site owner for each contact form
    /// submission.
    "contact_message.html" => ContactMessageTemplate { name, email, message }
}
