//! Ecore and XMI document fixtures.

pub const ZOO_ECORE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<ecore:EPackage xmi:version="2.0" xmlns:xmi="http://www.omg.org/XMI"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore"
    name="zoo" nsURI="http://example.org/zoo" nsPrefix="zoo">
  <eClassifiers xsi:type="ecore:EClass" name="Animal" abstract="true">
    <eStructuralFeatures xsi:type="ecore:EAttribute" name="name"
        eType="ecore:EDataType http://www.eclipse.org/emf/2002/Ecore#//EString"/>
  </eClassifiers>
  <eClassifiers xsi:type="ecore:EClass" name="Dog" eSuperTypes="#//Animal">
    <eStructuralFeatures xsi:type="ecore:EReference" name="owner" lowerBound="0"
        upperBound="1" eType="#//Person"/>
    <eOperations name="bark" eType="ecore:EDataType http://www.eclipse.org/emf/2002/Ecore#//EString">
      <eParameters name="times" eType="ecore:EDataType http://www.eclipse.org/emf/2002/Ecore#//EInt"/>
    </eOperations>
    <eOperations name="sit"/>
  </eClassifiers>
  <eClassifiers xsi:type="ecore:EClass" name="Person">
    <eStructuralFeatures xsi:type="ecore:EReference" name="pets" upperBound="-1"
        eType="#//Dog" containment="true"/>
  </eClassifiers>
  <eClassifiers xsi:type="ecore:EEnum" name="Color">
    <eLiterals name="BROWN"/>
    <eLiterals name="WHITE" value="1"/>
  </eClassifiers>
  <eClassifiers xsi:type="ecore:EDataType" name="Money" instanceClassName="java.math.BigDecimal"/>
  <eSubpackages name="care">
    <eClassifiers xsi:type="ecore:EClass" name="Vet">
      <eStructuralFeatures xsi:type="ecore:EReference" name="patients" upperBound="-1"
          eType="#//Dog"/>
    </eClassifiers>
  </eSubpackages>
</ecore:EPackage>
"##;

/// Generic wrappers only: a container whose element type is a type
/// parameter, and a supertype given through `eGenericSuperTypes`.
pub const GENERIC_ECORE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<ecore:EPackage xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" name="gen">
  <eClassifiers xsi:type="ecore:EClass" name="Box">
    <eTypeParameters name="T"/>
    <eStructuralFeatures xsi:type="ecore:EAttribute" name="item">
      <eGenericType eTypeParameter="#//Box/T"/>
    </eStructuralFeatures>
  </eClassifiers>
  <eClassifiers xsi:type="ecore:EClass" name="Foo"/>
  <eClassifiers xsi:type="ecore:EClass" name="FooBox">
    <eGenericSuperTypes eClassifier="#//Box">
      <eTypeArguments eClassifier="#//Foo"/>
    </eGenericSuperTypes>
    <eStructuralFeatures xsi:type="ecore:EReference" name="first" lowerBound="1">
      <eGenericType eClassifier="//@eClassifiers.1"/>
    </eStructuralFeatures>
  </eClassifiers>
</ecore:EPackage>
"##;

/// Two root packages referencing each other through `/N/...` paths.
pub const MULTI_ROOT_XMI: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="2.0" xmlns:xmi="http://www.omg.org/XMI"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore">
  <ecore:EPackage name="core">
    <eClassifiers xsi:type="ecore:EClass" name="Entity"/>
  </ecore:EPackage>
  <ecore:EPackage name="shop">
    <eClassifiers xsi:type="ecore:EClass" name="Order" eSuperTypes="/0/Entity">
      <eStructuralFeatures xsi:type="ecore:EReference" name="lines" upperBound="-1"
          containment="true" eType="/1/Line"/>
    </eClassifiers>
    <eClassifiers xsi:type="ecore:EClass" name="Line" eSuperTypes="/0/Entity"/>
  </ecore:EPackage>
</xmi:XMI>
"##;

/// An attribute typed by nothing at all.
pub const BROKEN_ECORE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<ecore:EPackage xmlns:ecore="http://www.eclipse.org/emf/2002/Ecore"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" name="broken">
  <eClassifiers xsi:type="ecore:EClass" name="Thing">
    <eStructuralFeatures xsi:type="ecore:EAttribute" name="mystery"/>
    <eStructuralFeatures xsi:type="ecore:EAttribute" name="known"
        eType="ecore:EDataType http://www.eclipse.org/emf/2002/Ecore#//EInt"/>
  </eClassifiers>
</ecore:EPackage>
"##;

/// UML-ish XMI for the structural scanner.
pub const UML_XMI: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmi:XMI xmi:version="2.1" xmlns:xmi="http://schema.omg.org/spec/XMI/2.1"
    xmlns:uml="http://www.eclipse.org/uml2/3.0.0/UML">
  <uml:Model xmi:id="m1" name="Shop">
    <packagedElement xsi:type="uml:Class" xmi:id="c1" name="Order">
      <generalization xmi:id="g1" general="c3"/>
      <ownedAttribute xmi:id="a1" name="customer" type="c2"/>
    </packagedElement>
    <packagedElement xsi:type="uml:Class" xmi:id="c2" name="Customer"/>
    <packagedElement xsi:type="uml:Class" xmi:id="c3" name="Entity"/>
    <packagedElement xsi:type="uml:Association" xmi:id="as1" memberEnd="a1 c2">
      <ownedEnd xmi:idref="c1"/>
    </packagedElement>
  </uml:Model>
</xmi:XMI>
"#;
