//! `inspect`: describes every input object in a single dictionary.

use procgate_core::{
    ExecutionOptions, Object, ObjectData, Payload, Process, ProcessError, ProcessInterface,
};
use serde_json::{Map, Value, json};

pub struct Inspect;

impl Process for Inspect {
    fn interface(&self) -> ProcessInterface {
        ProcessInterface::new(["any"], ["summary"])
    }

    fn execute(&self, input: Payload, options: &ExecutionOptions) -> Result<Payload, ProcessError> {
        let mut objects = Vec::with_capacity(input.len());
        for object in &input {
            objects.push(json!({
                "name": object.name(),
                "kind": object.kind(),
                "extension": object.default_extension(),
                "size": object.size()?,
            }));
        }

        let mut summary = Map::new();
        summary.insert("count".to_string(), json!(input.len()));
        summary.insert("keys".to_string(), json!(input.keys()));
        summary.insert("objects".to_string(), Value::Array(objects));
        summary.insert("mode".to_string(), json!(options.mode));

        let mut output = Payload::new();
        output.add(Object::new("", ObjectData::Dictionary(summary)), "summary");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procgate_core::ObjectKind;
    use std::path::PathBuf;

    #[test]
    fn test_inspect_summarises_inputs() {
        let mut input = Payload::new();
        input.add(Object::new("", ObjectData::Text("hello".into())), "greeting");
        input.add(Object::new("", ObjectData::Pdf(vec![1, 2, 3])), "doc");

        let options = ExecutionOptions {
            mode: "http".into(),
            config_path: PathBuf::from("/"),
            verbose: false,
            debug_mode: false,
        };
        let output = Inspect.execute(input, &options).unwrap();

        let summary = output.get("summary").unwrap();
        assert_eq!(summary.kind(), ObjectKind::Dictionary);
        let ObjectData::Dictionary(map) = summary.data() else {
            panic!("expected dictionary");
        };
        assert_eq!(map["count"], json!(2));
        assert_eq!(map["keys"], json!(["greeting", "doc"]));
        assert_eq!(map["objects"][0]["kind"], json!("text"));
        assert_eq!(map["objects"][0]["size"], json!(5));
        assert_eq!(map["objects"][1]["extension"], json!(".pdf"));
    }
}
