use interfacegen::{
    CollectingEmitter, Constant, EmitError, Emitter, GenerateError, GeneratedInterface, Generator, Input,
    NamingError, TypeMetadata,
};

fn fixture() -> Input {
    serde_json::from_str(include_str!("fixtures/accounts.json")).expect("valid fixture")
}

fn run(input: &Input) -> (Result<usize, GenerateError>, Vec<GeneratedInterface>) {
    let mut emitter = CollectingEmitter::default();
    let result = Generator::default()
        .run_pass(input, &mut emitter)
        .map(|summary| summary.emitted.len());
    (result, emitter.interfaces)
}

fn method_names(interface: &GeneratedInterface) -> Vec<&str> {
    interface.methods.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn one_interface_per_annotated_type() {
    let (result, interfaces) = run(&fixture());
    assert_eq!(result.unwrap(), 3);

    let names = interfaces.iter().map(|f| f.name.to_string()).collect::<Vec<_>>();
    assert_eq!(names, vec![
        "com.example.accounts.IEntity",
        "com.example.accounts.IAccount",
        "com.example.api.Store",
    ]);
}

#[test]
fn only_public_member_methods_are_copied() {
    let (_, interfaces) = run(&fixture());

    assert_eq!(method_names(&interfaces[0]), vec!["getId", "setId"]);
    assert_eq!(
        method_names(&interfaces[1]),
        vec!["getDisplayName", "setDisplayName", "settle", "tag", "compareTo"]
    );
}

#[test]
fn annotated_parent_interface_comes_first() {
    let (_, interfaces) = run(&fixture());

    assert_eq!(interfaces[0].super_interfaces, vec!["java.io.Serializable"]);
    assert_eq!(interfaces[1].super_interfaces, vec![
        "com.example.accounts.IEntity",
        "java.lang.Comparable<com.example.accounts.Account>",
    ]);
}

#[test]
fn property_constants_come_from_setters() {
    let (_, interfaces) = run(&fixture());

    assert_eq!(interfaces[1].constants, vec![Constant {
        name: "DisplayName".to_string(),
        value: "displayName".to_string(),
    }]);
    // propertyConstants is off for Entity
    assert!(interfaces[0].constants.is_empty());
}

#[test]
fn signatures_and_type_parameters_are_preserved() {
    let (_, interfaces) = run(&fixture());

    let tag = &interfaces[1].methods[3];
    assert_eq!(tag.type_parameters, vec!["T extends CharSequence"]);
    assert_eq!(tag.parameters[0].class, "T[]");
    assert!(tag.is_var_args);
    assert_eq!(tag.thrown_types, vec!["java.io.IOException"]);

    let setter = &interfaces[1].methods[1];
    assert_eq!(setter.parameters[0].annotations, vec!["@Nonnull"]);
    assert_eq!(setter.parameters[0].modifiers, vec!["final"]);

    assert_eq!(interfaces[2].type_parameters, vec!["K", "V extends com.example.accounts.Account"]);
}

#[test]
fn passes_are_idempotent() {
    let input = fixture();
    let (first, first_interfaces) = run(&input);
    let (second, second_interfaces) = run(&input);

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_interfaces, second_interfaces);
    assert_eq!(
        serde_json::to_string(&first_interfaces).unwrap(),
        serde_json::to_string(&second_interfaces).unwrap()
    );
}

#[test]
fn naming_failure_stops_the_pass() {
    let input: Input = serde_json::from_str(r#"{ "types": [
        { "name": "a.First", "package": "a", "request": {} },
        { "name": "a.Impl", "package": "a", "location": { "file": "a/Impl.java", "line": 3 },
          "request": { "namingStrategy": "EXCEPT_LAST_FOUR_CHARS" } },
        { "name": "a.Third", "package": "a", "request": {} }
    ] }"#).unwrap();

    let (result, interfaces) = run(&input);
    let err = result.unwrap_err();
    match &err {
        GenerateError::Naming { type_name, source, .. } => {
            assert_eq!(type_name, "a.Impl");
            assert_eq!(source, &NamingError::Empty);
        }
        other => panic!("expected a naming error, got {:?}", other),
    }
    assert_eq!(err.location().unwrap().to_string(), "a/Impl.java:3");

    // Third is never reached, Impl never emitted
    let names = interfaces.iter().map(|f| f.name.simple.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["IFirst"]);
}

#[test]
fn a_failed_pass_does_not_affect_the_next() {
    let broken: Input = serde_json::from_str(r#"{ "types": [
        { "name": "a.Nope", "package": "a", "request": { "namingStrategy": "UNKNOWN" } }
    ] }"#).unwrap();
    let generator = Generator::default();

    let mut emitter = CollectingEmitter::default();
    assert!(generator.run_pass(&broken, &mut emitter).is_err());

    let mut emitter = CollectingEmitter::default();
    let summary = generator.run_pass(&fixture(), &mut emitter).unwrap();
    assert_eq!(summary.emitted.len(), 3);
}

struct FailingEmitter;

impl Emitter for FailingEmitter {
    fn emit(&mut self, _: &GeneratedInterface) -> Result<(), EmitError> {
        Err(EmitError::Io {
            path: "IEntity.java".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn emission_failures_carry_no_location() {
    let input = fixture();
    let err = Generator::default().run_pass(&input, &mut FailingEmitter).unwrap_err();

    assert!(matches!(err, GenerateError::Emission(EmitError::Io { .. })));
    assert!(err.location().is_none());
}

#[test]
fn metadata_adapter_can_be_replaced() {
    struct Single(Input);

    impl TypeMetadata for Single {
        fn annotated(&self) -> Vec<&interfacegen::TypeDescriptor> {
            self.0.types.iter().rev().take(1).collect()
        }

        fn lookup(&self, name: &str) -> Option<&interfacegen::TypeDescriptor> {
            self.0.lookup(name)
        }
    }

    let metadata = Single(fixture());
    let mut emitter = CollectingEmitter::default();
    Generator::default().run_pass(&metadata, &mut emitter).unwrap();

    assert_eq!(emitter.interfaces.len(), 1);
    assert_eq!(emitter.interfaces[0].name.simple, "Store");
}
