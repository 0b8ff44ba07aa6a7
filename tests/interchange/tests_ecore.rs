//! Ecore documents through the reader and the extraction engine.

use ecore_graph::extract::{ExtractError, ExtractOptions, Extractor, FeatureRole};
use ecore_graph::graph::{Graph, NodeKind, SequentialEdgeIds};
use ecore_graph::interchange::{EcoreXmi, InterchangeError, ModelSource};
use rstest::rstest;

use crate::helpers::ecore_fixtures::{BROKEN_ECORE, GENERIC_ECORE, MULTI_ROOT_XMI, ZOO_ECORE};
use crate::helpers::graph_assertions::{assert_attributes, edge_summary, get_node};

fn graph_of(document: &str) -> Graph {
    let model = EcoreXmi.read(document.as_bytes()).unwrap();
    let ids = SequentialEdgeIds::new();
    Extractor::new(&ids).extract(&model).unwrap().graph
}

fn summary(kind: &str, source: &str, target: &str, label: Option<&str>) -> (String, String, String, Option<String>) {
    (
        kind.to_string(),
        source.to_string(),
        target.to_string(),
        label.map(str::to_string),
    )
}

#[test]
fn test_zoo_document() {
    let graph = graph_of(ZOO_ECORE);

    let order: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["Animal", "Dog", "Person", "Color", "Vet"]);

    assert_attributes(&graph, "Animal", &[("abstract", "true"), ("name", "EString")]);
    assert_attributes(
        &graph,
        "Dog",
        &[("bark(times EInt)", " EString"), ("sit()", " void")],
    );
    assert_attributes(&graph, "Color", &[("BROWN", "auto"), ("WHITE", "1")]);
    assert_eq!(get_node(&graph, "Color").kind, NodeKind::Enum);

    assert_eq!(
        edge_summary(&graph),
        vec![
            summary("reference", "Dog", "Person", Some("[0..1] owner")),
            summary("supertype", "Dog", "Animal", None),
            summary("reference", "Person", "Dog", Some("[0..*] pets")),
            summary("reference", "Vet", "Dog", Some("[0..*] patients")),
        ]
    );
    assert_eq!(graph.edges[2].containment(), Some(true));
    assert_eq!(graph.edges[0].containment(), Some(false));
}

#[test]
fn test_generic_wrappers() {
    let graph = graph_of(GENERIC_ECORE);

    assert_attributes(&graph, "Box", &[("item", "T")]);
    assert_eq!(
        edge_summary(&graph),
        vec![
            summary("reference", "FooBox", "Foo", Some("[1..1] first")),
            summary("supertype", "FooBox", "Box", None),
        ]
    );
}

#[test]
fn test_multi_root_document() {
    let model = EcoreXmi.read(MULTI_ROOT_XMI.as_bytes()).unwrap();
    assert_eq!(model.roots().len(), 2);

    let ids = SequentialEdgeIds::new();
    let graph = Extractor::new(&ids).extract(&model).unwrap().graph;
    let order: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["Entity", "Order", "Line"]);
    assert_eq!(
        edge_summary(&graph),
        vec![
            summary("reference", "Order", "Line", Some("[0..*] lines")),
            summary("supertype", "Order", "Entity", None),
            summary("supertype", "Line", "Entity", None),
        ]
    );
}

#[test]
fn test_broken_document_strict_and_lenient() {
    let model = EcoreXmi.read(BROKEN_ECORE.as_bytes()).unwrap();
    let ids = SequentialEdgeIds::new();

    let err = Extractor::new(&ids).extract(&model).unwrap_err();
    assert_eq!(
        err,
        ExtractError::type_resolution(FeatureRole::Attribute, "mystery", "Thing")
    );

    let extraction = Extractor::new(&ids)
        .with_options(ExtractOptions::new().lenient())
        .extract(&model)
        .unwrap();
    assert_attributes(&extraction.graph, "Thing", &[("known", "EInt")]);
    assert_eq!(extraction.skipped, vec![err]);
}

#[test]
fn test_non_numeric_bound_is_malformed() {
    let document = r##"<ecore:EPackage xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore" name="p">
  <eClassifiers xsi:type="ecore:EClass" name="A">
    <eStructuralFeatures xsi:type="ecore:EReference" name="r" upperBound="many" eType="#//A"/>
  </eClassifiers>
</ecore:EPackage>"##;
    let model = EcoreXmi.read(document.as_bytes()).unwrap();
    let ids = SequentialEdgeIds::new();
    let err = Extractor::new(&ids)
        .with_options(ExtractOptions::new().lenient())
        .extract(&model)
        .unwrap_err();

    assert!(matches!(err, ExtractError::MalformedModel(_)));
    assert!(err.to_string().contains("upperBound"));
}

#[rstest]
#[case(b"<ecore:EPackage name=\"p\"><eClassifiers></ecore:EPackage>".as_slice())]
#[case(b"<a/><b/>".as_slice())]
#[case(b"".as_slice())]
fn test_unreadable_documents(#[case] input: &[u8]) {
    assert!(EcoreXmi.read(input).is_err());
}

#[test]
fn test_validate_rejects_unrelated_xml() {
    assert!(EcoreXmi.validate(ZOO_ECORE.as_bytes()).is_ok());
    assert!(EcoreXmi.validate(MULTI_ROOT_XMI.as_bytes()).is_ok());
    let err = EcoreXmi.validate(b"<html/>").unwrap_err();
    assert!(matches!(err, InterchangeError::Xml(_)));
}
