// crates/sbml-pkg/src/packages/fbc/association.rs

use super::errors::*;
use super::gene_product_ref::GeneProductRef;
use super::junction::{FbcAnd, FbcOr};
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{ElementErrors, ElementSchema, SBML_L3_EMPTY_ROWS};
use crate::types::TypeCode;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::iter::Peekable;

/// Schema of the implicit list inside `<and>`/`<or>`. It is never written.
pub(crate) static ASSOCIATIONS_SCHEMA: ElementSchema = ElementSchema {
    element: "listOfAssociations",
    errors: ElementErrors {
        allowed_core_attributes: FBC_AND_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: FBC_AND_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FBC_AND_ALLOWED_ATTRIBUTES,
        allowed_elements: FBC_AND_TWO_CHILDREN,
        id_syntax: FBC_SBML_SID_SYNTAX,
        duplicate_id: FBC_DUPLICATE_COMPONENT_ID,
    },
    rows: SBML_L3_EMPTY_ROWS,
};

/// A gene association term: a junction or a single gene product.
#[derive(Debug, Clone, PartialEq)]
pub enum Association {
    And(FbcAnd),
    Or(FbcOr),
    GeneProductRef(GeneProductRef),
}

impl Association {
    pub fn is_fbc_and(&self) -> bool {
        matches!(self, Self::And(_))
    }

    pub fn is_fbc_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }

    pub fn is_gene_product_ref(&self) -> bool {
        matches!(self, Self::GeneProductRef(_))
    }

    pub fn as_fbc_and(&self) -> Option<&FbcAnd> {
        match self {
            Self::And(and) => Some(and),
            _ => None,
        }
    }

    pub fn as_fbc_and_mut(&mut self) -> Option<&mut FbcAnd> {
        match self {
            Self::And(and) => Some(and),
            _ => None,
        }
    }

    pub fn as_fbc_or(&self) -> Option<&FbcOr> {
        match self {
            Self::Or(or) => Some(or),
            _ => None,
        }
    }

    pub fn as_fbc_or_mut(&mut self) -> Option<&mut FbcOr> {
        match self {
            Self::Or(or) => Some(or),
            _ => None,
        }
    }

    pub fn as_gene_product_ref(&self) -> Option<&GeneProductRef> {
        match self {
            Self::GeneProductRef(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_gene_product_ref_mut(&mut self) -> Option<&mut GeneProductRef> {
        match self {
            Self::GeneProductRef(r) => Some(r),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn SBase {
        match self {
            Self::And(and) => and,
            Self::Or(or) => or,
            Self::GeneProductRef(r) => r,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SBase {
        match self {
            Self::And(and) => and,
            Self::Or(or) => or,
            Self::GeneProductRef(r) => r,
        }
    }

    /// Renders the association as a boolean expression over gene product
    /// ids, e.g. `a and (b or c)`.
    pub fn to_infix(&self) -> String {
        let mut out = String::new();
        self.write_infix(&mut out);
        out
    }

    fn write_infix(&self, out: &mut String) {
        match self {
            Self::GeneProductRef(r) => out.push_str(r.gene_product()),
            // Nested junctions keep their grouping; an `or` under `and` needs it anyway.
            Self::And(and) => write_junction(and.associations(), " and ", out, |child| {
                !child.is_gene_product_ref()
            }),
            Self::Or(or) => write_junction(or.associations(), " or ", out, Association::is_fbc_or),
        }
    }

    /// Parses an infix gene association.
    ///
    /// Operators are `and`/`&&` and `or`/`||`; `and` binds tighter. A chain
    /// of the same operator becomes one junction. Leaves must be valid SIds.
    pub fn parse_infix(text: &str, namespaces: &Namespaces) -> Result<Self, InfixError> {
        let tokens = tokenize(text)?;
        let mut parser = InfixParser {
            tokens: tokens.into_iter().peekable(),
            namespaces,
        };
        let association = parser.parse_or()?;
        match parser.tokens.next() {
            Some((position, _)) => Err(InfixError::UnexpectedToken { position }),
            None => Ok(association),
        }
    }
}

fn write_junction<'a>(
    children: impl Iterator<Item = &'a Association>,
    operator: &str,
    out: &mut String,
    needs_parentheses: impl Fn(&Association) -> bool,
) {
    for (n, child) in children.enumerate() {
        if n > 0 {
            out.push_str(operator);
        }
        if needs_parentheses(child) {
            out.push('(');
            child.write_infix(out);
            out.push(')');
        } else {
            child.write_infix(out);
        }
    }
}

impl From<FbcAnd> for Association {
    fn from(and: FbcAnd) -> Self {
        Self::And(and)
    }
}

impl From<FbcOr> for Association {
    fn from(or: FbcOr) -> Self {
        Self::Or(or)
    }
}

impl From<GeneProductRef> for Association {
    fn from(r: GeneProductRef) -> Self {
        Self::GeneProductRef(r)
    }
}

impl SBase for Association {
    fn type_code(&self) -> TypeCode {
        self.inner().type_code()
    }

    fn schema(&self) -> &'static ElementSchema {
        self.inner().schema()
    }

    fn core(&self) -> &SBaseCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        self.inner_mut().core_mut()
    }

    fn id_attribute(&self) -> Option<&str> {
        self.inner().id_attribute()
    }

    fn name_attribute(&self) -> Option<&str> {
        self.inner().name_attribute()
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        self.inner_mut().read_attributes(reader);
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        self.inner().write_attributes(attributes);
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        self.inner_mut().create_object(node, log)
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        self.inner().write_elements(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.inner().children()
    }

    fn has_required_elements(&self) -> bool {
        self.inner().has_required_elements()
    }
}

impl ListItem for Association {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        match name {
            "and" => Some(Self::And(FbcAnd::with_namespaces(ns.clone()))),
            "or" => Some(Self::Or(FbcOr::with_namespaces(ns.clone()))),
            "geneProductRef" => Some(Self::GeneProductRef(GeneProductRef::with_namespaces(ns.clone()))),
            _ => None,
        }
    }
}

// --- Infix parsing ---

/// Why an infix gene association could not be parsed. Positions are byte
/// offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfixError {
    UnexpectedCharacter { position: usize, found: char },
    UnexpectedToken { position: usize },
    UnclosedParenthesis { position: usize },
    UnexpectedEnd,
    InvalidGeneProduct(String),
}

impl fmt::Display for InfixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfixError::UnexpectedCharacter { position, found } => {
                write!(f, "Unexpected character '{}' at offset {}", found, position)
            }
            InfixError::UnexpectedToken { position } => {
                write!(f, "Unexpected token at offset {}", position)
            }
            InfixError::UnclosedParenthesis { position } => {
                write!(f, "Parenthesis opened at offset {} is never closed", position)
            }
            InfixError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            InfixError::InvalidGeneProduct(name) => {
                write!(f, "'{}' is not a valid gene product id", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InfixError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Name(&'a str),
    And,
    Or,
    Open,
    Close,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn tokenize(text: &str) -> Result<Vec<(usize, Token<'_>)>, InfixError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '(' => Token::Open,
            ')' => Token::Close,
            '&' | '|' => match chars.next() {
                Some((_, second)) if second == c => {
                    if c == '&' {
                        Token::And
                    } else {
                        Token::Or
                    }
                }
                _ => return Err(InfixError::UnexpectedCharacter { position, found: c }),
            },
            c if is_name_char(c) => {
                let mut end = position + c.len_utf8();
                while let Some(&(next, d)) = chars.peek() {
                    if !is_name_char(d) {
                        break;
                    }
                    end = next + d.len_utf8();
                    chars.next();
                }
                let word = &text[position..end];
                if word.eq_ignore_ascii_case("and") {
                    Token::And
                } else if word.eq_ignore_ascii_case("or") {
                    Token::Or
                } else {
                    Token::Name(word)
                }
            }
            _ => return Err(InfixError::UnexpectedCharacter { position, found: c }),
        };
        tokens.push((position, token));
    }
    Ok(tokens)
}

struct InfixParser<'a, I: Iterator<Item = (usize, Token<'a>)>> {
    tokens: Peekable<I>,
    namespaces: &'a Namespaces,
}

impl<'a, I: Iterator<Item = (usize, Token<'a>)>> InfixParser<'a, I> {
    fn eat(&mut self, token: Token<'a>) -> bool {
        if self.tokens.peek().is_some_and(|(_, t)| *t == token) {
            self.tokens.next();
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<Association, InfixError> {
        let first = self.parse_and()?;
        if !self.eat(Token::Or) {
            return Ok(first);
        }
        let mut or = FbcOr::with_namespaces(self.namespaces.clone());
        or.push_association(first);
        loop {
            let next = self.parse_and()?;
            or.push_association(next);
            if !self.eat(Token::Or) {
                return Ok(Association::Or(or));
            }
        }
    }

    fn parse_and(&mut self) -> Result<Association, InfixError> {
        let first = self.parse_primary()?;
        if !self.eat(Token::And) {
            return Ok(first);
        }
        let mut and = FbcAnd::with_namespaces(self.namespaces.clone());
        and.push_association(first);
        loop {
            let next = self.parse_primary()?;
            and.push_association(next);
            if !self.eat(Token::And) {
                return Ok(Association::And(and));
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Association, InfixError> {
        match self.tokens.next() {
            Some((_, Token::Name(name))) => {
                let mut r = GeneProductRef::with_namespaces(self.namespaces.clone());
                r.set_gene_product(name)
                    .map_err(|_| InfixError::InvalidGeneProduct(name.to_string()))?;
                Ok(Association::GeneProductRef(r))
            }
            Some((open, Token::Open)) => {
                let inner = self.parse_or()?;
                match self.tokens.next() {
                    Some((_, Token::Close)) => Ok(inner),
                    Some((position, _)) => Err(InfixError::UnexpectedToken { position }),
                    None => Err(InfixError::UnclosedParenthesis { position: open }),
                }
            }
            Some((position, _)) => Err(InfixError::UnexpectedToken { position }),
            None => Err(InfixError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespaces::Package;

    fn ns() -> Namespaces {
        Package::Fbc.default_namespaces()
    }

    fn genes(association: &Association) -> Vec<&str> {
        let junction: Vec<&Association> = match association {
            Association::And(and) => and.associations().collect(),
            Association::Or(or) => or.associations().collect(),
            Association::GeneProductRef(r) => return alloc::vec![r.gene_product()],
        };
        junction.into_iter().flat_map(genes).collect()
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let a = Association::parse_infix("a or b and c", &ns()).unwrap();
        let or = a.as_fbc_or().unwrap();
        assert_eq!(or.num_associations(), 2);
        assert!(or.association(0).unwrap().is_gene_product_ref());
        assert!(or.association(1).unwrap().is_fbc_and());
        assert_eq!(a.to_infix(), "a or b and c");
    }

    #[test]
    fn test_chains_flatten() {
        let a = Association::parse_infix("g1 && g2 && g3", &ns()).unwrap();
        let and = a.as_fbc_and().unwrap();
        assert_eq!(and.num_associations(), 3);
        assert_eq!(genes(&a), ["g1", "g2", "g3"]);
        assert_eq!(a.to_infix(), "g1 and g2 and g3");
    }

    #[test]
    fn test_parentheses_group() {
        let a = Association::parse_infix("(a || b) and c", &ns()).unwrap();
        let and = a.as_fbc_and().unwrap();
        assert!(and.association(0).unwrap().is_fbc_or());
        assert_eq!(a.to_infix(), "(a or b) and c");
    }

    #[test]
    fn test_single_gene() {
        let a = Association::parse_infix("  (b0001) ", &ns()).unwrap();
        assert_eq!(a.as_gene_product_ref().map(GeneProductRef::gene_product), Some("b0001"));
        assert_eq!(a.to_infix(), "b0001");
    }

    #[test]
    fn test_infix_round_trip() {
        for text in [
            "a and b",
            "a or b or c",
            "(a and b) and c",
            "(a or b) or c",
            "a and (b or c) and d",
            "x or y and (z or w)",
        ] {
            let parsed = Association::parse_infix(text, &ns()).unwrap();
            assert_eq!(parsed.to_infix(), text);
            let reparsed = Association::parse_infix(&parsed.to_infix(), &ns()).unwrap();
            assert_eq!(reparsed, parsed);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Association::parse_infix("", &ns()), Err(InfixError::UnexpectedEnd));
        assert_eq!(Association::parse_infix("a and", &ns()), Err(InfixError::UnexpectedEnd));
        assert_eq!(
            Association::parse_infix("(a or b", &ns()),
            Err(InfixError::UnclosedParenthesis { position: 0 })
        );
        assert_eq!(
            Association::parse_infix("a b", &ns()),
            Err(InfixError::UnexpectedToken { position: 2 })
        );
        assert_eq!(
            Association::parse_infix("a & b", &ns()),
            Err(InfixError::UnexpectedCharacter { position: 2, found: '&' })
        );
        assert_eq!(
            Association::parse_infix("a or 9z", &ns()),
            Err(InfixError::InvalidGeneProduct("9z".to_string()))
        );
    }

    #[test]
    fn test_create_item_by_tag() {
        assert!(Association::create_item("and", &ns()).is_some_and(|a| a.is_fbc_and()));
        assert!(Association::create_item("or", &ns()).is_some_and(|a| a.is_fbc_or()));
        assert!(Association::create_item("geneProduct", &ns()).is_none());
    }
}
