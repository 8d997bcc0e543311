pub static DID_WEB: &str = "did:web:example.com:alice";

pub static DID_DOC_WEB: &str = r##"
    {
        "@context": [
            "https://www.w3.org/ns/did/v1",
            "https://w3id.org/security/suites/jws-2020/v1"
        ],
        "id": "did:web:example.com:alice",
        "verificationMethod": [
            {
                "id": "did:web:example.com:alice#key-0",
                "type": "JsonWebKey2020",
                "controller": "did:web:example.com:alice",
                "publicKeyJwk": {
                    "kty": "OKP",
                    "crv": "Ed25519",
                    "x": "0-e2i2_Ua1S5HbTYnVB0lj2Z2ytXu2-tYmDFf8f5NjU"
                }
            },
            {
                "id": "did:web:example.com:alice#key-1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:web:example.com:alice",
                "publicKeyBase58": "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7",
                "publicKeyHex": "a0f1b2"
            },
            {
                "id": "did:web:example.com:alice#key-2",
                "type": "EcdsaSecp256k1RecoveryMethod2020",
                "controller": "did:web:example.com:alice",
                "blockchainAccountId": "eip155:1:0xab16a96D359eC26a11e2C2b3d8f8B8942d5Bfcdb"
            }
        ],
        "authentication": [
            "did:web:example.com:alice#key-0",
            "did:web:example.com:alice#key-1"
        ],
        "assertionMethod": ["did:web:example.com:alice#key-0"],
        "keyAgreement": [
            {
                "id": "did:web:example.com:alice#key-x25519",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:web:example.com:alice",
                "publicKeyMultibase": "z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc"
            },
            "did:web:example.com:alice#key-0"
        ],
        "service": [
            {
                "id": "did:web:example.com:alice#didcomm-1",
                "type": "DIDCommMessaging",
                "serviceEndpoint": "https://example.com/alice/didcomm",
                "accept": ["didcomm/v2"],
                "routingKeys": ["did:example:mediator#key-1"]
            },
            {
                "id": "did:web:example.com:alice#didcomm-legacy",
                "type": "DIDComm",
                "serviceEndpoint": "wss://example.com/alice/ws"
            },
            {
                "id": "did:web:example.com:alice#did-communication",
                "type": "did-communication",
                "serviceEndpoint": "https://example.com/alice/agent",
                "recipientKeys": ["did:web:example.com:alice#key-1"],
                "priority": 1
            },
            {
                "id": "did:web:example.com:alice#linked-domain",
                "type": "LinkedDomains",
                "serviceEndpoint": "https://alice.example.com",
                "description": "Alice's homepage"
            }
        ]
    }
"##;

pub static DIDCOMM_DID_DOC_WEB: &str = r##"
    {
        "did": "did:web:example.com:alice",
        "verification_methods": [
            {
                "id": "did:web:example.com:alice#key-0",
                "type": "JsonWebKey2020",
                "controller": "did:web:example.com:alice",
                "verification_material": {
                    "format": "JWK",
                    "value": {
                        "kty": "OKP",
                        "crv": "Ed25519",
                        "x": "0-e2i2_Ua1S5HbTYnVB0lj2Z2ytXu2-tYmDFf8f5NjU"
                    }
                }
            },
            {
                "id": "did:web:example.com:alice#key-1",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:web:example.com:alice",
                "verification_material": {
                    "format": "Base58",
                    "value": "ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7"
                }
            },
            {
                "id": "did:web:example.com:alice#key-2",
                "type": "EcdsaSecp256k1RecoveryMethod2020",
                "controller": "did:web:example.com:alice",
                "verification_material": {
                    "format": "Other",
                    "value": "eip155:1:0xab16a96D359eC26a11e2C2b3d8f8B8942d5Bfcdb"
                }
            },
            {
                "id": "did:web:example.com:alice#key-x25519",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:web:example.com:alice",
                "verification_material": {
                    "format": "Multibase",
                    "value": "z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc"
                }
            }
        ],
        "services": [
            {
                "id": "did:web:example.com:alice#didcomm-1",
                "kind": {
                    "DIDCommMessaging": {
                        "service_endpoint": "https://example.com/alice/didcomm",
                        "accept": ["didcomm/v2"],
                        "routing_keys": ["did:example:mediator#key-1"]
                    }
                }
            },
            {
                "id": "did:web:example.com:alice#didcomm-legacy",
                "kind": {
                    "DIDCommMessaging": {
                        "service_endpoint": "wss://example.com/alice/ws",
                        "accept": [],
                        "routing_keys": []
                    }
                }
            },
            {
                "id": "did:web:example.com:alice#did-communication",
                "kind": {
                    "Other": {
                        "type": "did-communication",
                        "serviceEndpoint": "https://example.com/alice/agent",
                        "recipientKeys": ["did:web:example.com:alice#key-1"],
                        "routingKeys": [],
                        "accept": [],
                        "priority": 1
                    }
                }
            },
            {
                "id": "did:web:example.com:alice#linked-domain",
                "kind": {
                    "Other": {
                        "type": "LinkedDomains",
                        "serviceEndpoint": "https://alice.example.com"
                    }
                }
            }
        ],
        "key_agreements": [
            "did:web:example.com:alice#key-x25519",
            "did:web:example.com:alice#key-0"
        ],
        "authentications": [
            "did:web:example.com:alice#key-0",
            "did:web:example.com:alice#key-1"
        ]
    }
"##;
