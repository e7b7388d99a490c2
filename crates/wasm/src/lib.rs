#![deny(unsafe_code)]
//! Browser bindings for glboot.
//!
//! Wraps an `HtmlCanvasElement` as a [`glboot_core::Surface`] and the
//! browser's context object as a [`glboot_core::HostContext`], so the same
//! acquisition and normalization path runs against a real WebGL
//! implementation. Host objects are passed around as handle ids that live
//! for a single call.

pub mod convert;
pub mod handles;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::convert::{classify_number, enum_from_number};
    use crate::handles::HandleTable;
    use glboot_core::{
        CallError, CallResult, ContextAcquirer, ContextAttributes, ContextKind, ContextReport,
        Defaults, Extension, ExtensionMember, Function, GlValue, HostContext, Member, Method,
        RenderingContext, Surface, CONTEXT_KINDS, WEBGL1_CONTEXT_KINDS,
    };
    use js_sys::{Array, Object, Reflect};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    type Handles = Rc<RefCell<HandleTable<JsValue>>>;

    fn error_text(e: &JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{e:?}"))
    }

    fn to_js(value: &GlValue, handles: &Handles) -> JsValue {
        match value {
            GlValue::Null => JsValue::NULL,
            GlValue::Bool(b) => JsValue::from_bool(*b),
            GlValue::Int(i) => JsValue::from_f64(*i as f64),
            GlValue::Float(f) => JsValue::from_f64(*f),
            GlValue::Handle(id) => handles.borrow().get(*id).cloned().unwrap_or(JsValue::NULL),
            GlValue::Text(s) => JsValue::from_str(s),
        }
    }

    fn from_js(value: JsValue, handles: &Handles) -> GlValue {
        if value.is_null() || value.is_undefined() {
            GlValue::Null
        } else if let Some(b) = value.as_bool() {
            GlValue::Bool(b)
        } else if let Some(n) = value.as_f64() {
            classify_number(n)
        } else if let Some(s) = value.as_string() {
            GlValue::Text(s)
        } else {
            GlValue::Handle(handles.borrow_mut().insert(value))
        }
    }

    fn invoke(
        func: &js_sys::Function,
        receiver: &JsValue,
        args: &[GlValue],
        handles: &Handles,
    ) -> CallResult {
        let js_args: Array = args.iter().map(|a| to_js(a, handles)).collect();
        func.apply(receiver, &js_args)
            .map(|v| from_js(v, handles))
            .map_err(|e| CallError::Host(error_text(&e)))
    }

    /// True for values that map to a [`Member`]: functions and enum numbers.
    fn is_member_value(value: &JsValue) -> bool {
        value.is_function() || value.as_f64().and_then(enum_from_number).is_some()
    }

    fn member_value(object: &JsValue, name: &str) -> Option<JsValue> {
        Reflect::get(object, &JsValue::from_str(name))
            .ok()
            .filter(is_member_value)
    }

    /// Every name on `object` and its prototypes that holds a function or a
    /// constant, stopping short of `Object.prototype`.
    fn property_names(object: &JsValue) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        let mut current = object.clone();
        while let Some(obj) = current.dyn_ref::<Object>() {
            let proto: JsValue = Object::get_prototype_of(obj).into();
            if proto.is_null() {
                break;
            }
            for name in Object::get_own_property_names(obj).iter() {
                if let Some(name) = name.as_string() {
                    if name != "constructor" && member_value(object, &name).is_some() {
                        names.insert(name);
                    }
                }
            }
            current = proto;
        }
        names
    }

    fn attributes_to_js(attributes: &ContextAttributes) -> JsValue {
        serde_json::to_string(attributes)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::UNDEFINED)
    }

    /// A browser rendering context seen through [`HostContext`].
    struct JsContext {
        raw: JsValue,
        handles: Handles,
    }

    impl JsContext {
        fn build_extension(&self, name: &str, object: JsValue) -> Extension {
            let mut ext = Extension::new(name);
            for key in property_names(&object) {
                let Some(value) = member_value(&object, &key) else {
                    continue;
                };
                if let Some(func) = value.dyn_ref::<js_sys::Function>() {
                    let func = func.clone();
                    let handles = Rc::clone(&self.handles);
                    ext = ext.with_member(
                        &key,
                        ExtensionMember::Method(Method::new(move |receiver, args| {
                            let target = receiver
                                .state::<JsValue>()
                                .cloned()
                                .unwrap_or(JsValue::UNDEFINED);
                            invoke(&func, &target, args, &handles)
                        })),
                    );
                } else if let Some(constant) = value.as_f64().and_then(enum_from_number) {
                    ext = ext.with_constant(&key, constant);
                }
            }
            ext.with_state(object)
        }
    }

    impl HostContext for JsContext {
        fn native_member(&self, name: &str) -> Option<Member> {
            let value = member_value(&self.raw, name)?;
            if let Some(func) = value.dyn_ref::<js_sys::Function>() {
                let func = func.clone();
                let raw = self.raw.clone();
                let handles = Rc::clone(&self.handles);
                Some(Member::Function(Function::new(move |args| {
                    invoke(&func, &raw, args, &handles)
                })))
            } else {
                value.as_f64().and_then(enum_from_number).map(Member::Constant)
            }
        }

        fn native_member_names(&self) -> Vec<String> {
            property_names(&self.raw).into_iter().collect()
        }

        fn get_extension(&self, name: &str) -> Option<Extension> {
            let get = Reflect::get(&self.raw, &JsValue::from_str("getExtension"))
                .ok()?
                .dyn_into::<js_sys::Function>()
                .ok()?;
            let object = get.call1(&self.raw, &JsValue::from_str(name)).ok()?;
            if object.is_null() || object.is_undefined() {
                return None;
            }
            Some(self.build_extension(name, object))
        }
    }

    /// A canvas seen through [`Surface`].
    struct CanvasSurface {
        canvas: HtmlCanvasElement,
        handles: Handles,
    }

    impl Surface for CanvasSurface {
        fn get_context(
            &mut self,
            kind: ContextKind,
            attributes: Option<&ContextAttributes>,
        ) -> Option<Box<dyn HostContext>> {
            let options = attributes
                .map(attributes_to_js)
                .unwrap_or(JsValue::UNDEFINED);
            match self
                .canvas
                .get_context_with_context_options(kind.as_str(), &options)
            {
                Ok(Some(raw)) => Some(Box::new(JsContext {
                    raw: raw.into(),
                    handles: Rc::clone(&self.handles),
                })),
                Ok(None) => None,
                Err(e) => {
                    log::debug!("getContext({kind}) threw: {}", error_text(&e));
                    None
                }
            }
        }
    }

    /// A bootstrapped context exported to JavaScript.
    #[wasm_bindgen]
    pub struct GlContext {
        context: RenderingContext,
        handles: Handles,
    }

    #[wasm_bindgen]
    impl GlContext {
        /// Context kind string, e.g. `"webgl2"`.
        pub fn kind(&self) -> String {
            self.context.kind().to_string()
        }

        #[wasm_bindgen(js_name = isWebGL2)]
        pub fn is_webgl2(&self) -> bool {
            self.context.is_webgl2()
        }

        pub fn constant(&self, name: &str) -> Option<u32> {
            self.context.constant(name)
        }

        /// Calls a native or installed function by name.
        ///
        /// Host objects among the arguments and the result only hold a
        /// handle for the duration of the call.
        pub fn call(&self, name: &str, args: Array) -> Result<JsValue, JsValue> {
            let mark = self.handles.borrow().checkpoint();
            let args: Vec<GlValue> = args.iter().map(|a| from_js(a, &self.handles)).collect();
            let result = self
                .context
                .call(name, &args)
                .map(|v| to_js(&v, &self.handles));
            self.handles.borrow_mut().rewind(mark);
            result.map_err(|e| JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen(js_name = memberNames)]
        pub fn member_names(&self) -> Array {
            self.context
                .member_names()
                .into_iter()
                .map(|n| JsValue::from_str(&n))
                .collect()
        }

        /// JSON summary of enabled extensions, installed names and conflicts.
        pub fn report(&self) -> Result<String, JsValue> {
            serde_json::to_string(&ContextReport::from_context(&self.context))
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }

    fn bootstrap(
        canvas: HtmlCanvasElement,
        kinds: &[ContextKind],
        attributes: Option<String>,
        add_extensions_to_context: Option<bool>,
    ) -> Result<Option<GlContext>, JsValue> {
        let attributes = attributes
            .as_deref()
            .map(ContextAttributes::from_json)
            .transpose()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut defaults = Defaults::default();
        if let Some(flag) = add_extensions_to_context {
            defaults.add_extensions_to_context = flag;
        }

        let handles = Handles::default();
        let mut surface = CanvasSurface {
            canvas,
            handles: Rc::clone(&handles),
        };
        let context =
            ContextAcquirer::new(defaults).acquire(&mut surface, kinds, attributes.as_ref());
        Ok(context.map(|context| GlContext { context, handles }))
    }

    /// Acquires a context from `canvas`, preferring WebGL2.
    ///
    /// `attributes` is a JSON object of context creation attributes.
    /// Returns `undefined` when the canvas supports no WebGL kind.
    #[wasm_bindgen(js_name = getContext)]
    pub fn get_context(
        canvas: HtmlCanvasElement,
        attributes: Option<String>,
        add_extensions_to_context: Option<bool>,
    ) -> Result<Option<GlContext>, JsValue> {
        bootstrap(canvas, CONTEXT_KINDS, attributes, add_extensions_to_context)
    }

    /// Acquires a WebGL1 context from `canvas`.
    #[wasm_bindgen(js_name = getWebGLContext)]
    pub fn get_webgl_context(
        canvas: HtmlCanvasElement,
        attributes: Option<String>,
        add_extensions_to_context: Option<bool>,
    ) -> Result<Option<GlContext>, JsValue> {
        bootstrap(
            canvas,
            WEBGL1_CONTEXT_KINDS,
            attributes,
            add_extensions_to_context,
        )
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
