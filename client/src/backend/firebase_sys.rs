//! Raw imports from the Firebase modular Web SDK (v10 ESM builds).

use js_sys::{Array, Function, Promise};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(raw_module = "https://www.gstatic.com/firebasejs/10.12.2/firebase-app.js")]
extern "C" {
    pub type FirebaseApp;

    #[wasm_bindgen(catch, js_name = initializeApp)]
    pub fn initialize_app(options: &JsValue) -> Result<FirebaseApp, JsValue>;
}

#[wasm_bindgen(raw_module = "https://www.gstatic.com/firebasejs/10.12.2/firebase-auth.js")]
extern "C" {
    pub type Auth;

    #[wasm_bindgen(js_name = getAuth)]
    pub fn get_auth(app: &FirebaseApp) -> Auth;

    pub type GoogleAuthProvider;

    #[wasm_bindgen(constructor)]
    pub fn new() -> GoogleAuthProvider;

    #[wasm_bindgen(catch, js_name = signInWithPopup)]
    pub fn sign_in_with_popup(auth: &Auth, provider: &GoogleAuthProvider) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = signOut)]
    pub fn sign_out(auth: &Auth) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = onAuthStateChanged)]
    pub fn on_auth_state_changed(auth: &Auth, next: &Function) -> Result<Function, JsValue>;

    pub type User;

    #[wasm_bindgen(method, getter)]
    pub fn uid(this: &User) -> String;

    #[wasm_bindgen(method, getter, js_name = displayName)]
    pub fn display_name(this: &User) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    pub fn email(this: &User) -> Option<String>;
}

#[wasm_bindgen(raw_module = "https://www.gstatic.com/firebasejs/10.12.2/firebase-firestore.js")]
extern "C" {
    pub type Firestore;

    #[wasm_bindgen(js_name = getFirestore)]
    pub fn get_firestore(app: &FirebaseApp) -> Firestore;

    pub type CollectionReference;

    #[wasm_bindgen(catch)]
    pub fn collection(firestore: &Firestore, path: &str) -> Result<CollectionReference, JsValue>;

    pub type Query;

    #[wasm_bindgen(catch)]
    pub fn query(reference: &CollectionReference) -> Result<Query, JsValue>;

    #[wasm_bindgen(catch, js_name = addDoc)]
    pub fn add_doc(reference: &CollectionReference, data: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_name = onSnapshot)]
    pub fn on_snapshot(query: &Query, next: &Function, error: &Function) -> Result<Function, JsValue>;

    pub type QuerySnapshot;

    #[wasm_bindgen(method, getter)]
    pub fn docs(this: &QuerySnapshot) -> Array;

    pub type QueryDocumentSnapshot;

    #[wasm_bindgen(method, getter)]
    pub fn id(this: &QueryDocumentSnapshot) -> String;

    #[wasm_bindgen(method)]
    pub fn data(this: &QueryDocumentSnapshot) -> JsValue;
}
