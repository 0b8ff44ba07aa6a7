//! Builders for in-memory models, bypassing any document backend.

use ecore_graph::model::{Model, ModelObject, ObjectId, ObjectKind};

/// Builds a model with one root package.
pub struct ModelBuilder {
    model: Model,
    package: ObjectId,
}

impl ModelBuilder {
    pub fn package(name: &str) -> Self {
        let mut model = Model::new();
        let package = model.add_root(ModelObject::new(ObjectKind::Package).with_name(name));
        Self { model, package }
    }

    pub fn root(&self) -> ObjectId {
        self.package
    }

    /// A sub-package of `parent`.
    pub fn subpackage(&mut self, parent: ObjectId, name: &str) -> ObjectId {
        self.model.add_contained(
            parent,
            "eSubpackages",
            ModelObject::new(ObjectKind::Package).with_name(name),
        )
    }

    /// A class in the root package.
    pub fn class(&mut self, name: &str) -> ObjectId {
        self.class_in(self.package, name)
    }

    pub fn class_in(&mut self, package: ObjectId, name: &str) -> ObjectId {
        self.model.add_contained(
            package,
            "eClassifiers",
            ModelObject::new(ObjectKind::Class).with_name(name),
        )
    }

    pub fn abstract_class(&mut self, name: &str) -> ObjectId {
        self.model.add_contained(
            self.package,
            "eClassifiers",
            ModelObject::new(ObjectKind::Class)
                .with_name(name)
                .with_feature("abstract", true),
        )
    }

    /// An enum in the root package; literals get no explicit value.
    pub fn enumeration(&mut self, name: &str, literals: &[&str]) -> ObjectId {
        let id = self.model.add_contained(
            self.package,
            "eClassifiers",
            ModelObject::new(ObjectKind::Enum).with_name(name),
        );
        for literal in literals {
            self.model.add_contained(
                id,
                "eLiterals",
                ModelObject::new(ObjectKind::EnumLiteral).with_name(literal),
            );
        }
        id
    }

    /// An external data type, as a backend would synthesize it.
    pub fn data_type(&mut self, name: &str) -> ObjectId {
        self.model
            .add_detached(ModelObject::proxy(ObjectKind::DataType, name))
    }

    pub fn attribute(&mut self, class: ObjectId, name: &str, ty: ObjectId) -> ObjectId {
        let id = self.untyped_attribute(class, name);
        self.model.set_reference(id, "eType", ty);
        id
    }

    pub fn untyped_attribute(&mut self, class: ObjectId, name: &str) -> ObjectId {
        self.model.add_contained(
            class,
            "eStructuralFeatures",
            ModelObject::new(ObjectKind::Attribute).with_name(name),
        )
    }

    /// An attribute typed only through an `eGenericType` wrapper.
    pub fn generic_attribute(&mut self, class: ObjectId, name: &str, classifier: ObjectId) -> ObjectId {
        let id = self.untyped_attribute(class, name);
        let generic = self.model.set_contained(
            id,
            "eGenericType",
            ModelObject::new(ObjectKind::GenericType),
        );
        self.model.set_reference(generic, "eClassifier", classifier);
        id
    }

    pub fn reference(
        &mut self,
        class: ObjectId,
        name: &str,
        target: ObjectId,
        bounds: Option<(i64, i64)>,
        containment: bool,
    ) -> ObjectId {
        let mut object = ModelObject::new(ObjectKind::Reference)
            .with_name(name)
            .with_feature("containment", containment);
        if let Some((lower, upper)) = bounds {
            object = object
                .with_feature("lowerBound", lower)
                .with_feature("upperBound", upper);
        }
        let id = self.model.add_contained(class, "eStructuralFeatures", object);
        self.model.set_reference(id, "eType", target);
        id
    }

    pub fn supertype(&mut self, class: ObjectId, parent: ObjectId) {
        self.model.push_reference(class, "eSuperTypes", parent);
    }

    /// An operation with typed parameters and an optional return type.
    pub fn operation(
        &mut self,
        class: ObjectId,
        name: &str,
        parameters: &[(&str, ObjectId)],
        returns: Option<ObjectId>,
    ) -> ObjectId {
        let id = self.model.add_contained(
            class,
            "eOperations",
            ModelObject::new(ObjectKind::Operation).with_name(name),
        );
        if let Some(ty) = returns {
            self.model.set_reference(id, "eType", ty);
        }
        for (param, ty) in parameters {
            let p = self.model.add_contained(
                id,
                "eParameters",
                ModelObject::new(ObjectKind::Parameter).with_name(param),
            );
            self.model.set_reference(p, "eType", *ty);
        }
        id
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn build(self) -> Model {
        self.model
    }
}

/// The zoo: abstract `Animal` with `name: String`, `Dog` extending it with
/// an optional `owner` reference to `Person`.
pub fn zoo_model() -> Model {
    let mut b = ModelBuilder::package("zoo");
    let string = b.data_type("String");
    let animal = b.abstract_class("Animal");
    b.attribute(animal, "name", string);
    let dog = b.class("Dog");
    let person = b.class("Person");
    b.supertype(dog, animal);
    b.reference(dog, "owner", person, Some((0, 1)), false);
    b.build()
}

/// `count` classes per package across `packages` nested packages, each
/// class referencing the previous one and extending the first.
pub fn wide_model(packages: usize, count: usize) -> Model {
    let mut b = ModelBuilder::package("p0");
    let string = b.data_type("EString");
    let mut parent = b.root();
    let mut first = None;
    let mut previous = None;

    for p in 0..packages {
        if p > 0 {
            parent = b.subpackage(parent, &format!("p{p}"));
        }
        for c in 0..count {
            let class = b.class_in(parent, &format!("C{p}_{c}"));
            b.attribute(class, "label", string);
            if let Some(prev) = previous {
                b.reference(class, "prev", prev, Some((0, -1)), c % 2 == 0);
            }
            match first {
                Some(root) => b.supertype(class, root),
                None => first = Some(class),
            }
            previous = Some(class);
        }
    }
    b.build()
}
