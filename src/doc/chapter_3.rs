/*!
# Functions

Functions are called with parentheses and always take the number of
arguments shown. A function that can't produce a result reports
`ILLEGAL FUNCTION CALL` with the name of the function.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
    0.123
    ```
    */
}

pub mod ASC {
    /*!
    ## `ASC(X$)` Returns the unicode value of the first character of X$.
    ```text
    PRINT ASC("A")
    65
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X.
    ```text
    PRINT ATN(3)
    1.2490457
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the character with unicode value X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(0.123)
    0.99244505
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e to the power of X.
    ```text
    PRINT EXP(1)
    2.7182817
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest integer <= X.
    ```text
    PRINT INT(9.9) INT(-9.9)
    9 -10
    ```
    */
}

pub mod LCASE {
    /*!
    ## `LCASE$(A$)` Returns A$ in lowercase.
    ```text
    PRINT LCASE$("Hunt")
    hunt
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT$(A$,X)` Returns the leftmost X characters of A$.
    ```text
    PRINT LEFT$("HUNT THE WUMPUS", 4)
    HUNT
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN(X$)` Returns the number of characters in X$.
    ```text
    PRINT LEN("TO")
    2
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    ```text
    PRINT LOG(8/37)
    -1.5314764
    ```
    */
}

pub mod MID {
    /*!
    ## `MID$(A$,X,Y)` Returns Y characters of A$ starting at position X.
    The first character is position 1.
    ```text
    PRINT MID$("HUNT THE WUMPUS", 6, 3)
    THE
    ```
    */
}

pub mod POS {
    /*!
    ## `POS(X)` Returns the horizontal cursor position of the terminal.
    `X` is ignored. First position is 0.
    ```text
    PRINT "    ";POS(0)
         5
    ```
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(A$,X)` Returns the rightmost X characters of A$.
    ```text
    PRINT RIGHT$("HUNT THE WUMPUS", 6)
    WUMPUS
    ```
    */
}

pub mod RND {
    /*!
    ## `RND(X)` Returns a random number from 0 up to but not including 1.
    `X` is ignored.
    ```text
    PRINT RND(1)
    0.6923401
    ```
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns the sign of X.
    Returns -1 if X is negative, 1 if positive, and 0 if zero.
    ```text
    PRINT SGN(+1)
    1
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    ```text
    PRINT SIN(0.123)
    0.1226901
    ```
    */
}

pub mod SPC {
    /*!
    ## `SPC(X)` Returns a string of X spaces.
    ```text
    PRINT "A" SPC(3) "B"
    A     B
    ```
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    ```text
    PRINT SQR(5)
    2.236068
    ```
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns the number X as a string.
    ```text
    PRINT STR$(-3.14) + "!"
    -3.14!
    ```
    */
}

pub mod TAB {
    /*!
    ## `TAB(X)` Returns a string of spaces.
    Used in a `PRINT` statement, moves to the requested column.
    Does nothing if already past the requested column.
    ```text
    PRINT "AB";TAB(10);"C"
    AB         C
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X in radians.
    ```text
    PRINT TAN(5/13)
    0.40477434
    ```
    */
}

pub mod UCASE {
    /*!
    ## `UCASE$(A$)` Returns A$ in uppercase.
    ```text
    PRINT UCASE$("Hunt")
    HUNT
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number at the start of X$, or 0.
    ```text
    PRINT VAL("1E-2")
    0.01
    ```
    */
}
