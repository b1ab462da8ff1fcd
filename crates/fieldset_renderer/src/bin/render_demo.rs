use fieldset_core::{Catalog, ColumnType, Config, FormContext, FormModel, Scalar};
use fieldset_renderer::{Collection, ControlType, FormBuilder, InputOptions, InputRequest};

struct User {
    name: Option<String>,
    active: bool,
}

impl FormModel for User {
    fn model_name(&self) -> &str {
        "user"
    }

    fn value(&self, attribute: &str) -> Option<Scalar> {
        match attribute {
            "name" => self.name.clone().map(Scalar::Str),
            "active" => Some(Scalar::Bool(self.active)),
            _ => None,
        }
    }

    fn column_type(&self, attribute: &str) -> Option<ColumnType> {
        match attribute {
            "active" => Some(ColumnType::Boolean),
            _ => Some(ColumnType::String),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_yaml(
        r#"
en:
  "yes": "Yes"
  "no": "No"
  labels:
    user:
      name: "Full name"
  hints:
    user:
      name: "How you want to be addressed"
"#,
    )?;
    let config: Config = serde_yaml::from_str(
        r#"
collection-wrapper-tag: ul
item-wrapper-tag: li
"#,
    )?;
    let context = FormContext::new("en").with_action("edit");
    let builder = FormBuilder::new(&config, &catalog, &context);

    let user = User {
        name: Some("Carlos".into()),
        active: false,
    };

    let select = InputRequest::new(&user, "name", ControlType::Select).with_options(InputOptions {
        collection: Some(Collection::scalars(["Jose", "Carlos"])),
        ..Default::default()
    });
    println!("=== SELECT ===");
    println!("{}", builder.render(&select)?);

    let radios = InputRequest::new(&user, "active", ControlType::RadioButtons);
    println!("=== RADIO GROUP ===");
    println!("{}", builder.render(&radios)?);

    Ok(())
}
